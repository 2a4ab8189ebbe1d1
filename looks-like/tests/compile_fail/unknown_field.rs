use looks_like::{exclude, like, Properties};

#[derive(Debug, PartialEq, Properties)]
struct Customer {
    pub name: String,
}

#[derive(Debug, PartialEq, Properties)]
struct Order {
    pub id: u32,
    pub customer: Customer,
}

fn main() {
    let expected = Order {
        id: 1,
        customer: Customer {
            name: "Ada".to_string(),
        },
    };

    let _ = exclude!(like(expected), |o| o.total);
}

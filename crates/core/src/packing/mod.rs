mod types;

pub use types::{Baggage, List, ListWithBaggages, NewBaggage, NewList};

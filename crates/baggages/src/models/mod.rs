mod baggage;
mod list;

pub use baggage::CreateBaggage;
pub use list::CreateList;

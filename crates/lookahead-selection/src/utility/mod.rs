mod count;

pub use count::{CountUtility, ExpectedCountUtility};

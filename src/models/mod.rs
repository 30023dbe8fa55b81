pub mod record;
pub mod issue;
pub mod graphql;

pub use record::*;
pub use issue::*;
pub use graphql::*;

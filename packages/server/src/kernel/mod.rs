pub mod deps;
pub mod test_dependencies;
pub mod traits;
pub mod view_cache;

pub use deps::{PgCredentialsProvider, PgInvoiceStore, ServerDeps};
pub use traits::{BaseIdentityProvider, BaseInvoiceStore, BaseViewCache};
pub use view_cache::InMemoryViewCache;

pub mod batch;
pub mod primitive;
pub mod record;
pub mod reply;
pub mod r#trait;


pub use batch::{CreateAccountsResultBatch, CreateTransfersResultBatch, Iter, ResultBatch};
pub use record::{CreateAccountsResult, CreateTransfersResult, EventResult, ResultRecord};
pub use reply::Reply;
pub use r#trait::ResultCode;

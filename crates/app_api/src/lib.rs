mod chat;
mod context;
mod handlers;
mod requests;
mod responses;

pub use chat::{
    DEFAULT_CHAT_ENDPOINT, InferenceRequest, MISSING_KEY_MESSAGE, build_prompt, reply_from_inference,
};
pub use context::AppContext;
pub use handlers::*;
pub use requests::*;
pub use responses::*;

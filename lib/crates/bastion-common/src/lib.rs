pub mod protocol;

pub use protocol::{
    HelperOp, HelperReply, HelperRequest, PROCESSING_TOPIC, UnknownOp,
};

use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Request one page of `PER_PAGE` articles from the remote API.
    FetchPage { request_id: RequestId, page: u32 },
}

// Resume lifecycle: multipart upload, text extraction, blob storage,
// listing, retrieval, and deletion. Analysis itself lives in `analysis`.

pub mod extract;
pub mod handlers;
pub mod storage;

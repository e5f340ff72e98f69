pub mod speech;
pub mod extract;
pub mod storage;
pub mod auth;

// 从 speech 导出
pub use speech::{
    FailingSynthesizer, MockSynthesizer, SpeechSynthesizer, SynthesisError, SynthesisResult,
};

// 从 extract 导出
pub use extract::{extract_docx_text, extract_text, ExtractError, ExtractResult};

// 从 storage 导出
pub use storage::{DocumentStore, MemoryStore, StorageError, StorageResult, UploadMeta};

// 从 auth 导出
pub use auth::{AuthProvider, StaticAuth, UserIdentity};

pub mod extractor;
pub mod langflow;
pub mod relay;

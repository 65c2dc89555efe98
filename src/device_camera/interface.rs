#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// Packed RGB bytes, row-major.
    pub pixels: Vec<u8>,
}

pub trait DeviceCamera: Send + Sync {
    fn play(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn pause(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn is_playing(&self) -> bool;
    /// Fails when no frame is available, e.g. before the stream is playing.
    fn capture_frame(&self) -> Result<Frame, Box<dyn std::error::Error + Send + Sync>>;
}

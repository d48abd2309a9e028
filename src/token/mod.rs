// Internal modules
mod format;
mod header;
#[allow(clippy::module_inception)]
mod token;
mod verify;

// Public API exports
pub use format::is_compatible_format;
pub use header::TokenHeader;
pub use token::Token;

/// One of the three dot-separated parts of a compact JWT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Header,
    Payload,
    Signature,
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Segment::Header => "header",
            Segment::Payload => "payload",
            Segment::Signature => "signature",
        })
    }
}

// Newline-delimited message framing for the stdio transport

use bytes::BytesMut;
use tokio_util::codec::{AnyDelimiterCodec, AnyDelimiterCodecError, Decoder};

/// Longest accepted message line, in bytes.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 8 * 1024 * 1024;

/// A line that could not be turned into text.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("message line exceeds {0} bytes")]
    TooLong(usize),

    #[error("message line is not valid UTF-8")]
    InvalidUtf8,
}

/// Splits input on `\n`, dropping a trailing `\r`.
///
/// Unlike `LinesCodec`, a bad line is yielded as an `Err` item rather than a
/// decoder error, so `FramedRead` keeps reading the lines after it. Only I/O
/// failures end the stream.
pub struct MessageCodec {
    inner: AnyDelimiterCodec,
    max_length: usize,
}

impl MessageCodec {
    pub fn new(max_length: usize) -> Self {
        Self {
            inner: AnyDelimiterCodec::new_with_max_length(b"\n".to_vec(), Vec::new(), max_length),
            max_length,
        }
    }

    fn frame(
        &self,
        decoded: Result<Option<bytes::Bytes>, AnyDelimiterCodecError>,
    ) -> Result<Option<Result<String, FrameError>>, std::io::Error> {
        match decoded {
            Ok(Some(chunk)) => {
                let chunk = chunk.strip_suffix(b"\r").unwrap_or(&chunk[..]);
                Ok(Some(
                    String::from_utf8(chunk.to_vec()).map_err(|_| FrameError::InvalidUtf8),
                ))
            }
            Ok(None) => Ok(None),
            // The inner codec discards up to the next newline on its next call
            Err(AnyDelimiterCodecError::MaxChunkLengthExceeded) => {
                Ok(Some(Err(FrameError::TooLong(self.max_length))))
            }
            Err(AnyDelimiterCodecError::Io(e)) => Err(e),
        }
    }
}

impl Decoder for MessageCodec {
    type Item = Result<String, FrameError>;
    type Error = std::io::Error;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let decoded = self.inner.decode(buf);
        self.frame(decoded)
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let decoded = self.inner.decode_eof(buf);
        self.frame(decoded)
    }
}

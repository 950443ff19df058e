use std::path::Path;

use tokio::io::AsyncReadExt;

use crate::error::ServiceError;

/// Audio containers the recognition service accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Aiff,
    Flac,
}

impl AudioFormat {
    /// Detects the container from its magic bytes
    pub fn detect(data: &[u8]) -> Option<Self> {
        if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WAVE" {
            return Some(Self::Wav);
        }
        if data.len() >= 12 && &data[0..4] == b"FORM" && matches!(&data[8..12], b"AIFF" | b"AIFC") {
            return Some(Self::Aiff);
        }
        if data.len() >= 4 && &data[0..4] == b"fLaC" {
            return Some(Self::Flac);
        }
        None
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Aiff => "audio/aiff",
            Self::Flac => "audio/flac",
        }
    }
}

/// A complete, size-bounded audio clip read from disk
#[derive(Debug, Clone)]
pub struct AudioClip {
    data: Vec<u8>,
    format: AudioFormat,
}

impl AudioClip {
    /// Reads the whole file at `path`.
    ///
    /// Open/read failures are `IOError`; empty, oversized or unrecognized
    /// clips are `RecognitionError`.
    pub async fn open(path: impl AsRef<Path>, max_bytes: u64) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        let mut file = tokio::fs::File::open(path).await?;

        let len = file.metadata().await?.len();
        if len > max_bytes {
            return Err(ServiceError::RecognitionError(format!(
                "audio clip is {} bytes, limit is {}",
                len, max_bytes
            )));
        }

        // Reported length is zero for FIFOs and device files
        let mut data = Vec::with_capacity(len as usize);
        (&mut file).take(max_bytes + 1).read_to_end(&mut data).await?;
        if data.len() as u64 > max_bytes {
            return Err(ServiceError::RecognitionError(format!(
                "audio clip exceeds {} bytes",
                max_bytes
            )));
        }
        Self::from_bytes(data)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self, ServiceError> {
        if data.is_empty() {
            return Err(ServiceError::RecognitionError("audio clip is empty".to_string()));
        }
        let format = AudioFormat::detect(&data).ok_or_else(|| {
            ServiceError::RecognitionError("unsupported audio format, expected WAV, AIFF or FLAC".to_string())
        })?;
        Ok(Self { data, format })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Minimal PCM WAV file (16-bit mono) holding `samples` of silence
#[cfg(test)]
pub(crate) fn silent_wav(samples: u32) -> Vec<u8> {
    let data_len = samples * 2;
    let mut out = Vec::new();
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&16_000u32.to_le_bytes());
    out.extend_from_slice(&32_000u32.to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.resize(out.len() + data_len as usize, 0);
    out
}

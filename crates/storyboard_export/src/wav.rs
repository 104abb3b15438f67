//! WAV framing and decoding of narration PCM.

use storyboard_core::{PCM_BITS_PER_SAMPLE, PCM_CHANNELS, PCM_SAMPLE_RATE_HZ};
use storyboard_error::{ExportError, ExportErrorKind, StoryboardResult};

/// Length of the canonical RIFF/WAVE header.
pub const WAV_HEADER_LEN: usize = 44;

/// Canonical 44-byte header for `data_len` bytes of narration PCM.
///
/// All integers are little-endian. The format is PCM, mono, 24 kHz, 16 bit.
/// The RIFF size field saturates at `u32::MAX`; [`wrap_pcm`] rejects payloads
/// that large before framing them.
///
/// ```
/// use storyboard_export::wav_header;
///
/// let header = wav_header(u32::MAX);
/// assert_eq!(&header[4..8], &u32::MAX.to_le_bytes());
/// ```
pub fn wav_header(data_len: u32) -> [u8; WAV_HEADER_LEN] {
    let channels = PCM_CHANNELS;
    let bits = PCM_BITS_PER_SAMPLE;
    let block_align = channels * bits / 8;
    let byte_rate = PCM_SAMPLE_RATE_HZ * u32::from(block_align);

    let mut header = [0u8; WAV_HEADER_LEN];
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&data_len.saturating_add(36).to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes());
    header[20..22].copy_from_slice(&1u16.to_le_bytes());
    header[22..24].copy_from_slice(&channels.to_le_bytes());
    header[24..28].copy_from_slice(&PCM_SAMPLE_RATE_HZ.to_le_bytes());
    header[28..32].copy_from_slice(&byte_rate.to_le_bytes());
    header[32..34].copy_from_slice(&block_align.to_le_bytes());
    header[34..36].copy_from_slice(&bits.to_le_bytes());
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_len.to_le_bytes());
    header
}

/// Prefix `pcm` with its WAV header.
///
/// # Errors
///
/// Returns [`ExportErrorKind::InvalidPcm`] if the payload is too large for a
/// RIFF size field.
///
/// # Examples
///
/// ```
/// use storyboard_export::wrap_pcm;
///
/// let wav = wrap_pcm(&[0u8; 4]).unwrap();
/// assert_eq!(wav.len(), 48);
/// assert_eq!(&wav[0..4], b"RIFF");
/// ```
pub fn wrap_pcm(pcm: &[u8]) -> StoryboardResult<Vec<u8>> {
    let data_len = u32::try_from(pcm.len())
        .ok()
        .filter(|len| len.checked_add(36).is_some())
        .ok_or_else(|| {
            ExportError::new(ExportErrorKind::InvalidPcm(format!(
                "{} bytes exceeds the WAV size limit",
                pcm.len()
            )))
        })?;

    let mut wav = Vec::with_capacity(WAV_HEADER_LEN + pcm.len());
    wav.extend_from_slice(&wav_header(data_len));
    wav.extend_from_slice(pcm);
    Ok(wav)
}

/// Decode little-endian 16-bit PCM into samples in `[-1.0, 1.0)`.
///
/// # Errors
///
/// Returns [`ExportErrorKind::InvalidPcm`] when the payload has an odd length.
///
/// # Examples
///
/// ```
/// use storyboard_export::decode_pcm_samples;
///
/// let samples = decode_pcm_samples(&[0x00, 0x40, 0x00, 0x80]).unwrap();
/// assert_eq!(samples, vec![0.5, -1.0]);
/// ```
pub fn decode_pcm_samples(pcm: &[u8]) -> StoryboardResult<Vec<f32>> {
    if pcm.len() % 2 != 0 {
        return Err(ExportError::new(ExportErrorKind::InvalidPcm(format!(
            "odd payload length {}",
            pcm.len()
        )))
        .into());
    }
    Ok(pcm
        .chunks_exact(2)
        .map(|pair| f32::from(i16::from_le_bytes([pair[0], pair[1]])) / 32768.0)
        .collect())
}

//! WAV 容器处理
//!
//! - 解析 RIFF/WAVE 头，定位 data chunk
//! - 在语音数据前插入静音（silence padding）
//! - 基于 symphonia 探测音频信息，校验引擎输出
//! - 将 PCM i16 样本编码为 WAV

use std::io::Cursor;

use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use thiserror::Error;

/// WAV 处理错误
#[derive(Debug, Error)]
pub enum WavError {
    #[error("Invalid WAV: {0}")]
    InvalidInput(String),

    #[error("Unsupported WAV: {0}")]
    Unsupported(String),

    #[error("Decoding error: {0}")]
    DecodingError(String),
}

/// 解析后的 WAV 头信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub audio_format: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    /// data chunk 负载在整个文件中的起始偏移
    pub data_start: usize,
    /// data chunk 负载长度（已按实际文件长度截断）
    pub data_size: usize,
}

/// 音频信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub duration_ms: u64,
}

/// 解析 WAV 文件头
pub fn parse_header(data: &[u8]) -> Result<WavHeader, WavError> {
    if data.len() < 44 {
        return Err(WavError::InvalidInput("WAV data too short".to_string()));
    }

    if &data[0..4] != b"RIFF" {
        return Err(WavError::InvalidInput("missing RIFF header".to_string()));
    }

    if &data[8..12] != b"WAVE" {
        return Err(WavError::InvalidInput("missing WAVE identifier".to_string()));
    }

    let mut pos = 12;
    let mut fmt: Option<(u16, u16, u32, u16, u16)> = None;

    while pos + 8 <= data.len() {
        let chunk_id = &data[pos..pos + 4];
        let chunk_size = read_u32(data, pos + 4) as usize;
        let body = pos + 8;

        match chunk_id {
            b"fmt " => {
                if chunk_size < 16 || body + 16 > data.len() {
                    return Err(WavError::InvalidInput("invalid fmt chunk size".to_string()));
                }
                fmt = Some((
                    read_u16(data, body),
                    read_u16(data, body + 2),
                    read_u32(data, body + 4),
                    read_u16(data, body + 12),
                    read_u16(data, body + 14),
                ));
            }
            b"data" => {
                let (audio_format, channels, sample_rate, block_align, bits_per_sample) = fmt
                    .ok_or_else(|| WavError::InvalidInput("data chunk before fmt chunk".to_string()))?;

                // 流式写出的 WAV 可能把 data 长度写成 0xFFFFFFFF
                let data_size = chunk_size.min(data.len() - body);

                return Ok(WavHeader {
                    audio_format,
                    channels,
                    sample_rate,
                    block_align,
                    bits_per_sample,
                    data_start: body,
                    data_size,
                });
            }
            _ => {}
        }

        pos = body.saturating_add(chunk_size);
        // 对齐到偶数字节
        if chunk_size % 2 != 0 {
            pos = pos.saturating_add(1);
        }
    }

    if fmt.is_none() {
        return Err(WavError::InvalidInput("missing fmt chunk".to_string()));
    }
    Err(WavError::InvalidInput("missing data chunk".to_string()))
}

/// 在 data chunk 开头插入 `seconds` 秒静音
///
/// 仅支持 PCM 整数格式；8 位 PCM 的静音值为 0x80，其余为 0。
/// data chunk 之后的尾部 chunk 会被丢弃。
pub fn prepend_silence(data: &[u8], seconds: f32) -> Result<Vec<u8>, WavError> {
    let header = parse_header(data)?;

    if !(seconds.is_finite() && seconds > 0.0) {
        return Ok(data.to_vec());
    }

    if header.audio_format != 1 {
        return Err(WavError::Unsupported(format!(
            "cannot pad non-PCM audio (format tag {})",
            header.audio_format
        )));
    }

    let silence_frames = (header.sample_rate as f64 * seconds as f64) as usize;
    let silence_bytes = silence_frames * header.block_align as usize;
    let silence_value = if header.bits_per_sample == 8 { 0x80 } else { 0x00 };

    let payload = &data[header.data_start..header.data_start + header.data_size];
    let new_data_size = silence_bytes + payload.len();

    let mut wav = Vec::with_capacity(header.data_start + new_data_size);
    wav.extend_from_slice(&data[..header.data_start]);
    wav.resize(wav.len() + silence_bytes, silence_value);
    wav.extend_from_slice(payload);

    let riff_size = (wav.len() - 8) as u32;
    wav[4..8].copy_from_slice(&riff_size.to_le_bytes());
    let size_pos = header.data_start - 4;
    wav[size_pos..size_pos + 4].copy_from_slice(&(new_data_size as u32).to_le_bytes());

    Ok(wav)
}

/// 使用 symphonia 探测 WAV，返回采样率、声道数与时长
pub fn probe(data: &[u8]) -> Result<AudioInfo, WavError> {
    let cursor = Cursor::new(data.to_vec());
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

    let mut hint = Hint::new();
    hint.with_extension("wav");

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| WavError::DecodingError(format!("Probe failed: {}", e)))?;

    let track = probed
        .format
        .default_track()
        .ok_or_else(|| WavError::DecodingError("No audio track found".to_string()))?;

    let params = &track.codec_params;
    let sample_rate = params
        .sample_rate
        .ok_or_else(|| WavError::DecodingError("Unknown sample rate".to_string()))?;
    let channels = params
        .channels
        .map(|c| c.count() as u16)
        .ok_or_else(|| WavError::DecodingError("Unknown channel count".to_string()))?;
    let frames = params.n_frames.unwrap_or(0);

    let duration_ms = if sample_rate > 0 {
        frames * 1000 / sample_rate as u64
    } else {
        0
    };

    Ok(AudioInfo {
        sample_rate,
        channels,
        duration_ms,
    })
}

/// 将 PCM i16 样本编码为 WAV
pub fn encode_pcm16(samples: &[i16], sample_rate: u32, channels: u16) -> Vec<u8> {
    let bits_per_sample: u16 = 16;
    let byte_rate = sample_rate * channels as u32 * (bits_per_sample / 8) as u32;
    let block_align = channels * (bits_per_sample / 8);

    let data_size = samples.len() * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size);

    // RIFF header
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(file_size as u32).to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    // fmt chunk
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&bits_per_sample.to_le_bytes());

    // data chunk
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&(data_size as u32).to_le_bytes());
    for sample in samples {
        wav.extend_from_slice(&sample.to_le_bytes());
    }

    wav
}

fn read_u16(data: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([data[pos], data[pos + 1]])
}

fn read_u32(data: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1 秒，16kHz，单声道，16 位
    fn create_test_wav() -> Vec<u8> {
        let samples: Vec<i16> = (0..16000).map(|i| (i % 100) as i16).collect();
        encode_pcm16(&samples, 16000, 1)
    }

    #[test]
    fn test_parse_header() {
        let wav = create_test_wav();
        let header = parse_header(&wav).unwrap();
        assert_eq!(header.audio_format, 1);
        assert_eq!(header.channels, 1);
        assert_eq!(header.sample_rate, 16000);
        assert_eq!(header.bits_per_sample, 16);
        assert_eq!(header.data_start, 44);
        assert_eq!(header.data_size, 32000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_header(b"not a wav").is_err());
        assert!(parse_header(&[0u8; 64]).is_err());
    }

    #[test]
    fn test_parse_clamps_streaming_data_size() {
        let mut wav = create_test_wav();
        wav[40..44].copy_from_slice(&u32::MAX.to_le_bytes());
        let header = parse_header(&wav).unwrap();
        assert_eq!(header.data_size, 32000);
    }

    #[test]
    fn test_parse_skips_unknown_chunks() {
        let plain = create_test_wav();
        let mut wav = plain[..36].to_vec();
        wav.extend_from_slice(b"LIST");
        wav.extend_from_slice(&3u32.to_le_bytes());
        wav.extend_from_slice(&[1, 2, 3, 0]); // 奇数长度 + 对齐字节
        wav.extend_from_slice(&plain[36..]);

        let header = parse_header(&wav).unwrap();
        assert_eq!(header.data_start, 56);
        assert_eq!(header.data_size, 32000);
    }

    #[test]
    fn test_prepend_silence() {
        let wav = create_test_wav();
        let padded = prepend_silence(&wav, 0.25).unwrap();

        let header = parse_header(&padded).unwrap();
        // 0.25s * 16000Hz * 2 bytes
        assert_eq!(header.data_size, 32000 + 8000);
        assert_eq!(padded.len(), 44 + 40000);
        assert_eq!(
            u32::from_le_bytes([padded[4], padded[5], padded[6], padded[7]]) as usize,
            padded.len() - 8
        );
        assert!(padded[44..44 + 8000].iter().all(|&b| b == 0));
        assert_eq!(&padded[44 + 8000..], &wav[44..]);
    }

    #[test]
    fn test_prepend_zero_silence_is_identity() {
        let wav = create_test_wav();
        assert_eq!(prepend_silence(&wav, 0.0).unwrap(), wav);
    }

    #[test]
    fn test_probe_reports_duration() {
        let wav = create_test_wav();
        let info = probe(&wav).unwrap();
        assert_eq!(info.sample_rate, 16000);
        assert_eq!(info.channels, 1);
        assert!(info.duration_ms >= 990 && info.duration_ms <= 1010);
    }

    #[test]
    fn test_probe_rejects_non_wav() {
        assert!(probe(b"definitely not audio at all, just some text bytes").is_err());
    }
}

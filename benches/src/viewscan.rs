#![allow(unused_crate_dependencies)] // False positives because there are both a library and a binary.
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]

use core::fmt;
use std::time::Instant;

use anyhow::Context as _;
use bounded_view::{BoundedBytes, UNBOUNDED};
use tracing::{debug, info, warn};

/// TPKT version byte.
const TPKT_VERSION: u8 = 3;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("Usage: viewscan [OPTIONS] <FILE>");
        println!();
        println!("Walk the TPKT frames of a raw capture file through bounded views.");
        println!();
        println!("Options:");
        println!("  --frame-limit <N>    Stop after N frames (default: no limit)");
        println!("  --strict             Fail on the first malformed frame instead of resynchronizing");
        println!();
        println!("Logging is configured with the VIEWSCAN_LOG environment variable.");
        std::process::exit(0);
    }

    let frame_limit: Option<usize> = args.opt_value_from_str("--frame-limit")?;
    let strict = args.contains("--strict");

    let filename: String = args.free_from_str().context("missing capture filename")?;
    let capture = tokio::fs::read(&filename)
        .await
        .with_context(|| format!("Failed to read file: {filename}"))?;

    let start = Instant::now();
    let stats = scan(&capture, frame_limit, strict)?;
    let elapsed = start.elapsed();

    info!(?elapsed, frames = stats.frames, "Scan complete");

    println!("Frames: {}", stats.frames);
    println!("Malformed: {}", stats.malformed);
    println!(
        "Payload: {} in {} ({} trailing)",
        bytesize::ByteSize(u64::try_from(stats.payload_bytes)?),
        bytesize::ByteSize(u64::try_from(capture.len())?),
        bytesize::ByteSize(u64::try_from(stats.trailing)?),
    );
    if let Some(smallest) = stats.smallest {
        println!("Frame length: {smallest}..={}", stats.largest);
    }
    println!("Elapsed: {elapsed:?}");

    Ok(())
}

#[derive(Debug, Default)]
struct ScanStats {
    frames: usize,
    malformed: usize,
    payload_bytes: usize,
    trailing: usize,
    smallest: Option<usize>,
    largest: usize,
}

impl ScanStats {
    fn record(&mut self, frame_len: usize, payload_len: usize) {
        self.frames += 1;
        self.payload_bytes += payload_len;
        self.smallest = Some(self.smallest.map_or(frame_len, |smallest| smallest.min(frame_len)));
        self.largest = self.largest.max(frame_len);
    }
}

fn scan(capture: &[u8], frame_limit: Option<usize>, strict: bool) -> anyhow::Result<ScanStats> {
    let mut stats = ScanStats::default();
    let mut remaining = BoundedBytes::<'_, 0, UNBOUNDED>::new(capture);

    while !remaining.is_empty() && frame_limit.is_none_or(|limit| stats.frames < limit) {
        let offset = capture.len() - remaining.len();

        match next_frame(remaining.as_slice()) {
            Ok((payload, rest)) => {
                debug!(offset, payload_len = payload.len(), "Frame");
                stats.record(remaining.len() - rest.len(), payload.len());
                remaining = BoundedBytes::new(rest);
            }
            Err(error @ FrameError::Truncated { .. }) if strict || !has_frame_after_start(remaining.as_slice()) => {
                if strict {
                    return Err(error).with_context(|| format!("frame #{} at offset {offset}", stats.frames));
                }

                warn!(offset, %error, "Trailing bytes");
                stats.trailing = remaining.len();
                break;
            }
            Err(error) => {
                if strict {
                    return Err(error).with_context(|| format!("frame #{} at offset {offset}", stats.frames));
                }

                debug!(offset, %error, "Malformed frame, resynchronizing");
                stats.malformed += 1;
                remaining = BoundedBytes::new(remaining.drop_front(1));
            }
        }
    }

    Ok(stats)
}

/// Returns `true` if a complete frame starts anywhere after the first byte of `input`.
///
/// A truncated frame followed by a complete one was garbage rather than the cut-off tail of the
/// capture.
fn has_frame_after_start(input: &[u8]) -> bool {
    (1..input.len()).any(|skip| next_frame(&input[skip..]).is_ok())
}

/// Splits the next TPKT frame off `input`, returning its payload and the bytes following it.
fn next_frame(input: &[u8]) -> Result<(BoundedBytes<'_, 0, UNBOUNDED>, &[u8]), FrameError> {
    let Ok(input) = BoundedBytes::<'_, 4, UNBOUNDED>::try_new(input) else {
        return Err(FrameError::Truncated {
            expected: 4,
            available: input.len(),
        });
    };

    let [version, _reserved, length_hi, length_lo] = input.first_static::<4>().to_array();
    if version != TPKT_VERSION {
        return Err(FrameError::BadVersion(version));
    }

    let length = usize::from(u16::from_be_bytes([length_hi, length_lo]));
    if length < 4 {
        return Err(FrameError::LengthTooSmall(length));
    }

    let frame = input.try_subarray(0, length).map_err(|_| FrameError::Truncated {
        expected: length,
        available: input.len(),
    })?;

    let payload = BoundedBytes::<'_, 4, UNBOUNDED>::assumed(frame).drop_front_static::<4, 0, UNBOUNDED>();

    Ok((payload, input.drop_front(length)))
}

#[derive(Debug)]
enum FrameError {
    BadVersion(u8),
    LengthTooSmall(usize),
    Truncated { expected: usize, available: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadVersion(version) => write!(f, "unexpected TPKT version {version}"),
            Self::LengthTooSmall(length) => write!(f, "TPKT length {length} is smaller than its header"),
            Self::Truncated { expected, available } => {
                write!(f, "frame needs {expected} bytes, only {available} available")
            }
        }
    }
}

impl core::error::Error for FrameError {}

fn setup_logging() -> anyhow::Result<()> {
    use tracing::metadata::LevelFilter;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let fmt_layer = tracing_subscriber::fmt::layer().compact();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var("VIEWSCAN_LOG")
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .context("failed to set tracing global subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(payload: &[u8]) -> Vec<u8> {
        let length = u16::try_from(payload.len() + 4).unwrap();
        let [hi, lo] = length.to_be_bytes();
        [&[TPKT_VERSION, 0, hi, lo][..], payload].concat()
    }

    #[test]
    fn walks_consecutive_frames() {
        let capture = [frame(b"first"), frame(b""), frame(b"third frame")].concat();

        let stats = scan(&capture, None, true).unwrap();

        assert_eq!(stats.frames, 3);
        assert_eq!(stats.payload_bytes, 16);
        assert_eq!(stats.smallest, Some(4));
        assert_eq!(stats.largest, 15);
        assert_eq!(stats.trailing, 0);
    }

    #[test]
    fn resynchronizes_after_garbage() {
        let capture = [
            &[0xFF, 0x00][..],
            frame(b"payload").as_slice(),
            &[3, 0, 0, 2][..],
            frame(b"x").as_slice(),
        ]
        .concat();

        let stats = scan(&capture, None, false).unwrap();

        assert_eq!(stats.frames, 2);
        assert_eq!(stats.payload_bytes, 8);
        assert!(stats.malformed >= 3);
    }

    #[test]
    fn strict_mode_fails_on_garbage() {
        let capture = [&[0xFF][..], frame(b"payload").as_slice()].concat();

        let error = scan(&capture, None, true).unwrap_err();

        assert_eq!(error.to_string(), "frame #0 at offset 0");
        assert_eq!(error.root_cause().to_string(), "unexpected TPKT version 255");
    }

    #[test]
    fn truncated_tail_is_reported() {
        let mut capture = frame(b"complete");
        capture.extend_from_slice(&frame(b"cut short")[..6]);

        let stats = scan(&capture, None, false).unwrap();

        assert_eq!(stats.frames, 1);
        assert_eq!(stats.trailing, 6);
    }

    #[test]
    fn bogus_length_does_not_swallow_following_frames() {
        let capture = [
            &[TPKT_VERSION, 0, 0xFF, 0xFF][..],
            frame(b"first").as_slice(),
            frame(b"second").as_slice(),
        ]
        .concat();

        let stats = scan(&capture, None, false).unwrap();

        assert_eq!(stats.frames, 2);
        assert_eq!(stats.payload_bytes, 11);
        assert_eq!(stats.malformed, 4);
        assert_eq!(stats.trailing, 0);
    }

    #[test]
    fn bogus_length_fails_in_strict_mode() {
        let capture = [&[TPKT_VERSION, 0, 0xFF, 0xFF][..], frame(b"first").as_slice()].concat();

        let error = scan(&capture, None, true).unwrap_err();

        assert_eq!(error.root_cause().to_string(), "frame needs 65535 bytes, only 13 available");
    }

    #[test]
    fn frame_limit_stops_early() {
        let capture = [frame(b"a"), frame(b"b"), frame(b"c")].concat();

        let stats = scan(&capture, Some(2), true).unwrap();

        assert_eq!(stats.frames, 2);
    }
}

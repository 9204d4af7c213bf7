// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Splits a multipart MJPEG byte stream into individual JPEG images
//!
//! Multipart boundaries and part headers are ignored; frames are found by
//! scanning for the JPEG start-of-image (`FF D8`) and end-of-image
//! (`FF D9`) markers.

const SOI: [u8; 2] = [0xFF, 0xD8];
const EOI: [u8; 2] = [0xFF, 0xD9];

#[derive(Debug)]
pub struct MjpegSplitter {
    buffer: Vec<u8>,
    max_buffer: usize,
}

impl Default for MjpegSplitter {
    fn default() -> Self {
        Self::new(crate::settings::stream::MAX_BUFFER)
    }
}

fn find(haystack: &[u8], needle: [u8; 2]) -> Option<usize> {
    haystack.windows(2).position(|w| w == needle)
}

impl MjpegSplitter {
    pub fn new(max_buffer: usize) -> Self {
        Self {
            buffer: Vec::new(),
            max_buffer,
        }
    }

    /// Feed a chunk and return every complete JPEG it finishes, oldest first
    pub fn push(&mut self, chunk: &[u8]) -> Vec<Vec<u8>> {
        self.buffer.extend_from_slice(chunk);
        let mut frames = Vec::new();

        loop {
            let Some(start) = find(&self.buffer, SOI) else {
                // Keep a trailing 0xFF in case the marker straddles chunks
                let keep = usize::from(self.buffer.last() == Some(&0xFF));
                let drop = self.buffer.len() - keep;
                self.buffer.drain(..drop);
                break;
            };
            if start > 0 {
                self.buffer.drain(..start);
            }
            match find(&self.buffer[2..], EOI) {
                Some(offset) => {
                    let end = 2 + offset + 2;
                    frames.push(self.buffer.drain(..end).collect());
                }
                None => break,
            }
        }

        if self.buffer.len() > self.max_buffer {
            tracing::warn!(
                "Discarding {} buffered bytes without a complete frame",
                self.buffer.len()
            );
            self.buffer.clear();
        }

        frames
    }

    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg(body: &[u8]) -> Vec<u8> {
        let mut out = SOI.to_vec();
        out.extend_from_slice(body);
        out.extend_from_slice(&EOI);
        out
    }

    fn part(frame: &[u8]) -> Vec<u8> {
        let mut out = b"--frame\r\nContent-Type: image/jpeg\r\n\r\n".to_vec();
        out.extend_from_slice(frame);
        out.extend_from_slice(b"\r\n");
        out
    }

    #[test]
    fn extracts_frames_from_multipart_body() {
        let a = jpeg(b"first");
        let b = jpeg(b"second");
        let mut stream = part(&a);
        stream.extend(part(&b));

        let mut splitter = MjpegSplitter::new(1024);
        let frames = splitter.push(&stream);
        assert_eq!(frames, vec![a, b]);
        assert_eq!(splitter.buffered(), 0);
    }

    #[test]
    fn frames_split_across_chunks() {
        let frame = jpeg(b"payload bytes");
        let stream = part(&frame);
        let mut splitter = MjpegSplitter::new(1024);

        let mut frames = Vec::new();
        for byte in &stream {
            frames.extend(splitter.push(std::slice::from_ref(byte)));
        }
        assert_eq!(frames, vec![frame]);
    }

    #[test]
    fn oversized_partial_frame_is_dropped() {
        let mut splitter = MjpegSplitter::new(16);
        let mut chunk = SOI.to_vec();
        chunk.extend(std::iter::repeat_n(0u8, 32));
        assert!(splitter.push(&chunk).is_empty());
        assert_eq!(splitter.buffered(), 0);

        // Recovers on the next complete frame
        let frame = jpeg(b"ok");
        assert_eq!(splitter.push(&frame), vec![frame]);
    }
}

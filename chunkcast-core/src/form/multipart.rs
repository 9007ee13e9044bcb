use super::FormData;

const CRLF: &[u8] = b"\r\n";

pub fn fresh_boundary() -> String {
    format!("----chunkcast{}", uuid::Uuid::new_v4().simple())
}

fn part_header(boundary: &str, field: &str, filename: &str, content_type: &str) -> String {
    format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {content_type}\r\n\r\n",
        escape_quoted(field),
        escape_quoted(filename),
    )
}

// Quotes and line breaks would end the header value early; percent-encode
// them the way browsers do for multipart names.
fn escape_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("%22"),
            '\r' => out.push_str("%0D"),
            '\n' => out.push_str("%0A"),
            c => out.push(c),
        }
    }
    out
}

pub(super) fn encoded_len(form: &FormData) -> usize {
    let parts: usize = form
        .parts()
        .iter()
        .map(|p| {
            part_header(form.boundary(), &p.field, &p.filename, &p.content_type).len()
                + p.bytes.len()
                + CRLF.len()
        })
        .sum();
    parts + form.boundary().len() + 6
}

pub(super) fn write_body(form: &FormData, out: &mut Vec<u8>) {
    for p in form.parts() {
        out.extend_from_slice(
            part_header(form.boundary(), &p.field, &p.filename, &p.content_type).as_bytes(),
        );
        out.extend_from_slice(&p.bytes);
        out.extend_from_slice(CRLF);
    }
    out.extend_from_slice(b"--");
    out.extend_from_slice(form.boundary().as_bytes());
    out.extend_from_slice(b"--");
    out.extend_from_slice(CRLF);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_file_body_layout() {
        let mut form = FormData::new();
        form.append("file", b"RIFF".to_vec(), "chunk_1_a.wav", "audio/wav");
        let body = form.encode();
        let b = form.boundary();
        let expected = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"chunk_1_a.wav\"\r\nContent-Type: audio/wav\r\n\r\nRIFF\r\n--{b}--\r\n"
        );
        assert_eq!(body, expected.as_bytes());
        assert_eq!(body.len(), encoded_len(&form));
        assert_eq!(form.content_type(), format!("multipart/form-data; boundary={b}"));
    }

    #[test]
    fn boundaries_are_unique() {
        assert_ne!(FormData::new().boundary(), FormData::new().boundary());
    }

    #[test]
    fn quotes_in_filenames_are_escaped() {
        let mut form = FormData::new();
        form.append("file", vec![], "chunk_1_\"odd\".mp3", "audio/mpeg");
        let body = String::from_utf8(form.encode()).unwrap();
        assert!(body.contains("filename=\"chunk_1_%22odd%22.mp3\""));
    }
}

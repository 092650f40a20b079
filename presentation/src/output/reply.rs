//! Reply chunking
//!
//! Replies are delivered in fixed-size pieces, mirroring the transport
//! limit the reply format was designed around. Chunks are measured in
//! characters, not bytes, so multi-byte text never splits mid-character.

/// Transport cap on a single delivered message
pub const MAX_CHUNK_CHARS: usize = 4096;

/// Split a reply into ordered chunks of at most [`MAX_CHUNK_CHARS`]
/// characters. An empty reply yields no chunks.
pub fn split_chunks(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.char_indices().nth(MAX_CHUNK_CHARS) {
            Some((split, _)) => {
                let (head, tail) = rest.split_at(split);
                chunks.push(head);
                rest = tail;
            }
            None => {
                chunks.push(rest);
                break;
            }
        }
    }

    chunks
}

/// Print a reply chunk by chunk, one delivered message per chunk.
pub fn print_chunked(reply: &str) {
    for chunk in split_chunks(reply) {
        println!("{}", chunk);
    }
}

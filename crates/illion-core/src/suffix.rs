/// Turn a concatenated morpheme stream into the finished illion name.
///
/// "...illi" only needs "on" ("milli" -> "million"). Otherwise a trailing
/// vowel is dropped before "illion" ("quadraginta" -> "quadragintillion").
pub fn finalize(mut stream: String) -> String {
    if stream.ends_with("illi") {
        stream.push_str("on");
        return stream;
    }

    if stream.as_bytes().last().copied().is_some_and(is_vowel) {
        stream.pop();
    }
    stream.push_str("illion");
    stream
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

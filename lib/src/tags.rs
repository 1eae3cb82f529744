/// Format a list of tags the way Buku stores them: joined by commas and
/// wrapped in a leading and trailing comma, so `["a", "b"]` becomes `",a,b,"`.
pub fn format_tags<S: AsRef<str>>(tags: &[S]) -> String {
    let mut out = String::with_capacity(tags.iter().map(|t| t.as_ref().len() + 1).sum::<usize>() + 1);
    out.push(',');
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(tag.as_ref());
    }
    out.push(',');
    out
}

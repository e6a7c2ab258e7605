use crate::visitor::{VecWriter, Visitor};

/// Z-array of `s`: `z[i]` is the length of the longest common prefix of `s`
/// and `s[i..]`, with `z[0] = 0`. Linear time.
pub fn z_array<T: Eq>(s: &[T]) -> Vec<usize> {
    let n = s.len();
    let mut z = vec![0; n];

    // [l, r) is the rightmost window seen so far that matches a prefix of s.
    let mut l = 0;
    let mut r = 0;

    for i in 1..n {
        let mut len = if i < r {
            (r - i).min(z[i - l])
        } else {
            0
        };

        while i + len < n && s[len] == s[i + len] {
            len += 1;
        }
        z[i] = len;

        if i + len > r {
            l = i;
            r = i + len;
        }
    }

    z
}

/// Visits the start offset of every occurrence of `pattern` in `text`, in
/// increasing order. Overlapping occurrences are all reported. An empty
/// pattern matches nowhere.
pub fn find_all_visit<T, V>(pattern: &[T], text: &[T], visitor: &mut V)
where
    T: Eq,
    V: Visitor<usize>,
{
    if pattern.is_empty() || pattern.len() > text.len() {
        return;
    }

    // `None` separates pattern from text and never equals a real symbol, so
    // no Z value can run past the pattern.
    let combined: Vec<Option<&T>> = pattern.iter().map(Some)
        .chain(std::iter::once(None))
        .chain(text.iter().map(Some))
        .collect();

    let z = z_array(&combined);
    let offset = pattern.len() + 1;

    for (i, &len) in z.iter().enumerate().skip(offset) {
        if len == pattern.len() {
            visitor.visit(i - offset);
        }
    }
}

pub fn find_all<T: Eq>(pattern: &[T], text: &[T]) -> Vec<usize> {
    let mut writer = VecWriter::new();
    find_all_visit(pattern, text, &mut writer);
    writer.into()
}

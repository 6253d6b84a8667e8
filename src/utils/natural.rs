use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two names in natural order.
///
/// - Letters are compared by their base form: case and accents are ignored
///   (`"a" == "A"`, `"é" == "e"`), so `"Écho"` sorts between `"Delta"` and `"Zeta"`.
/// - Runs of ASCII digits are compared by numeric value, so `"a2" < "a10"`.
/// - Leading zeros do not matter: `"ep007" == "ep7"`.
///
/// Names that compare equal keep their relative order under a stable sort.
pub fn compare(a: &str, b: &str) -> Ordering {
    let (a, b) = (fold(a), fold(b));
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        let ord = match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let l = take_digits(&mut left);
                let r = take_digits(&mut right);
                compare_digits(&l, &r)
            }
            (Some(x), Some(y)) => {
                left.next();
                right.next();
                x.cmp(&y)
            }
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

/// [`compare`] with the arguments swapped.
pub fn compare_descending(a: &str, b: &str) -> Ordering {
    compare(b, a)
}

/// Canonical decomposition with combining marks dropped, lowercased.
fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

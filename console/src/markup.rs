/// Returns the text strictly between the first `>` and the last `<`.
///
/// `<a href="/group_users/?groupname=g1">g1</a>` yields `g1`. Input without
/// both delimiters in that order yields an empty string.
pub fn extract_identifier(fragment: &str) -> &str {
    let (Some(open), Some(close)) = (fragment.find('>'), fragment.rfind('<')) else {
        return "";
    };
    if close <= open {
        return "";
    }
    &fragment[open + 1..close]
}

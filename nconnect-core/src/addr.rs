//! Address list and address formatting helpers
//!
//! The console edits address lists in a multiline text field, one NKN client
//! address per line. These helpers do the conversion both ways, plus the
//! suffix-public-key extraction used when only the key half of an address
//! matters.

/// Join an address list into the newline-separated form the console edits.
///
/// `None` and the empty list both render as the empty string.
pub fn addrs_to_str(addrs: Option<&[String]>) -> String {
    match addrs {
        Some(addrs) => addrs.join("\n"),
        None => String::new(),
    }
}

/// Split a newline-separated address block back into a list.
///
/// Empty lines are dropped, so the round trip through [`addrs_to_str`]
/// reproduces any list that contains no empty strings and no embedded
/// newlines within a single address.
pub fn str_to_addrs(s: &str) -> Vec<String> {
    s.split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract the public key suffix of an NKN client address.
///
/// Addresses take the form `identifier.pubkey` (the identifier itself may
/// contain dots); the public key is everything after the final separator.
/// An address with no separator is already a bare public key.
///
/// # Examples
///
/// ```rust
/// use nconnect_core::addr::pubkey_from_addr;
///
/// assert_eq!(pubkey_from_addr("web.admin.abcd1234"), "abcd1234");
/// assert_eq!(pubkey_from_addr("abcd1234"), "abcd1234");
/// ```
pub fn pubkey_from_addr(addr: &str) -> &str {
    match addr.rfind('.') {
        Some(idx) => &addr[idx + 1..],
        None => addr,
    }
}

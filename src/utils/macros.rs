/// Unwrap an `Ok` value or run `$block` with the error bound to `$err`.
///
/// `$block` usually diverges (`return`, `continue`, `break`).
#[macro_export]
macro_rules! ok_or {
    ($result: expr, $err: pat => $block: expr) => {
        match $result {
            Ok(val) => val,
            Err($err) => $block,
        }
    };
}

use crate::bytes::*;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SizeFormat {
    #[default]
    Raw,
    Human,
}

impl SizeFormat {
    /// Unit letters for 1024^1 through 1024^6.
    pub const HUMAN_UNITS: [&str; 6] = [K, M, G, T, P, E];

    pub fn format(&self, bytes: u64) -> String {
        match self {
            Self::Raw => format!("{bytes}"),
            Self::Human => Self::format_human(bytes),
        }
    }

    /// Base-1024 size rounded up to one decimal place.
    ///
    /// Sizes below 1024 have no unit letter. The arithmetic is done in tenths
    /// on integers so that exact values such as 1536 never round up to 1.6K.
    fn format_human(bytes: u64) -> String {
        let bytes = bytes as u128;
        if bytes < BASE {
            return format!("{bytes}");
        }

        let mut exp = 1;
        while exp < Self::HUMAN_UNITS.len() && bytes >= BASE.pow(exp as u32 + 1) {
            exp += 1;
        }

        let mut tenths = Self::tenths_rounded_up(bytes, exp);
        if tenths >= BASE * 10 && exp < Self::HUMAN_UNITS.len() {
            exp += 1;
            tenths = Self::tenths_rounded_up(bytes, exp);
        }

        format!(
            "{}.{}{}",
            tenths / 10,
            tenths % 10,
            Self::HUMAN_UNITS[exp - 1]
        )
    }

    fn tenths_rounded_up(bytes: u128, exp: usize) -> u128 {
        let divisor = BASE.pow(exp as u32);
        (bytes * 10).div_ceil(divisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_is_plain_integer() {
        assert_eq!(SizeFormat::Raw.format(0), "0");
        assert_eq!(SizeFormat::Raw.format(150), "150");
        assert_eq!(SizeFormat::Raw.format(u64::MAX), u64::MAX.to_string());
    }

    #[test]
    fn human_below_1024_has_no_suffix() {
        assert_eq!(SizeFormat::Human.format(0), "0");
        assert_eq!(SizeFormat::Human.format(42), "42");
        assert_eq!(SizeFormat::Human.format(1023), "1023");
    }

    #[test]
    fn human_rounds_up_to_one_decimal() {
        assert_eq!(SizeFormat::Human.format(1024), "1.0K");
        assert_eq!(SizeFormat::Human.format(1025), "1.1K");
        assert_eq!(SizeFormat::Human.format(1536), "1.5K");
        assert_eq!(SizeFormat::Human.format(10 * 1024 + 1), "10.1K");
        assert_eq!(SizeFormat::Human.format(5 * 1024 * 1024), "5.0M");
        assert_eq!(SizeFormat::Human.format(3 * 1024 * 1024 * 1024), "3.0G");
    }

    #[test]
    fn human_carries_into_next_unit() {
        // 1023.95K rounds up to 1024.0K, which is shown as 1.0M.
        let bytes = 1024 * 1024 - 1;
        assert_eq!(SizeFormat::Human.format(bytes), "1.0M");
    }

    #[test]
    fn human_tops_out_at_exbibytes() {
        assert_eq!(SizeFormat::Human.format(1 << 60), "1.0E");
        assert_eq!(SizeFormat::Human.format(u64::MAX), "16.0E");
    }
}

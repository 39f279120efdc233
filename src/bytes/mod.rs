pub mod units;

const K: &str = "K";
const M: &str = "M";
const G: &str = "G";
const T: &str = "T";
const P: &str = "P";
const E: &str = "E";

const BASE: u128 = 1024;

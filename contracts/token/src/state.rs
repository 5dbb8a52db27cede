pub const CONTRACT_NAME: &str = "crates.io:mtk-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const TOKEN_NAME: &str = "MyToken";
pub const TOKEN_SYMBOL: &str = "MTK";
pub const TOKEN_DECIMALS: u8 = 18;

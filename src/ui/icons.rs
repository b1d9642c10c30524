pub struct Icons;

impl Icons {
    pub const PACKAGE: &str = "📦";
    pub const CART: &str = "🛒";
    pub const LEDGER: &str = "🧾";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const DATABASE: &str = "🗄️";
}

pub struct Icons;

impl Icons {
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const DATABASE: &str = "🗄️";
    pub const PIN: &str = "📍";
    pub const GLOBE: &str = "🌍";
    pub const WRENCH: &str = "🔧";
}

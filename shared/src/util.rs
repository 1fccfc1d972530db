/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at storefront scale)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Generate a human-readable, time-derived order number.
///
/// Format: `VT-YYYYMMDD-HHMMSS-RRR` where RRR is a random suffix that
/// keeps two checkouts within the same second apart. The authoritative
/// order record is whatever persistence returns; this number is primarily
/// for the outbound WhatsApp message.
pub fn order_number(now: chrono::DateTime<chrono::Local>) -> String {
    use rand::Rng;
    let suffix: u16 = rand::thread_rng().gen_range(0..1000);
    format!("VT-{}-{:03}", now.format("%Y%m%d-%H%M%S"), suffix)
}

//! Remote configuration wire format and persistence
//!
//! A remote tuning tool reads and writes each curve parameter as a 16-bit
//! unsigned value, big-endian on the wire, through a fixed linear transform
//! per field. The transforms live in a versioned codec table so a future
//! parameter generation can change field ranges without touching the
//! protocol plumbing.
//!
//! Persistence is a flat fixed-size record (version byte, four big-endian
//! u16 fields, enabled byte) written through the host's `ConfigStorage`
//! capability. Corrupt, short or unreadable records fall back to the
//! compiled-in defaults.

use crate::config::{AccelConfig, TAKEOFF_MIN};
use crate::host::ConfigStorage;

/// Linear transform mapping a field's float domain onto 0..65535.
///
/// `encoded = round((value - min) * scale)`, saturating at the u16 bounds;
/// decode is the inverse.
#[derive(Clone, Copy, Debug)]
pub struct FieldCodec {
    pub min: f32,
    pub scale: f32,
}

impl FieldCodec {
    pub const fn new(min: f32, scale: f32) -> Self {
        Self { min, scale }
    }

    pub fn encode(&self, value: f32) -> u16 {
        let raw = ((value - self.min) * self.scale).round();
        raw.clamp(0.0, u16::MAX as f32) as u16
    }

    pub fn decode(&self, raw: u16) -> f32 {
        raw as f32 / self.scale + self.min
    }
}

/// One parameter generation's field codecs.
pub struct CodecTable {
    pub version: u8,
    pub takeoff: FieldCodec,
    pub growth_rate: FieldCodec,
    pub offset: FieldCodec,
    pub limit: FieldCodec,
}

/// Generation 1: scale-by-10000 fixed point, shifted so each field's domain
/// minimum lands on encoded zero. Offset spans -3.0..3.55; the others start
/// at their domain minimum.
pub const CODEC_V1: CodecTable = CodecTable {
    version: 1,
    takeoff: FieldCodec::new(TAKEOFF_MIN, 10000.0),
    growth_rate: FieldCodec::new(0.0, 10000.0),
    offset: FieldCodec::new(-3.0, 10000.0),
    limit: FieldCodec::new(0.0, 10000.0),
};

/// Protocol channel claimed by this engine.
pub const CHANNEL_ID: u8 = 24;

pub const CMD_SET_VALUE: u8 = 0x07;
pub const CMD_GET_VALUE: u8 = 0x08;
pub const CMD_SAVE: u8 = 0x09;
pub const CMD_UNHANDLED: u8 = 0xFF;

pub const ID_TAKEOFF: u8 = 1;
pub const ID_GROWTH_RATE: u8 = 2;
pub const ID_OFFSET: u8 = 3;
pub const ID_LIMIT: u8 = 4;
pub const ID_ENABLED: u8 = 5;

/// Dispatch one remote-configuration command buffer.
///
/// Layout: `[command_id, channel_id, value_id, value_hi, value_lo]`.
/// Get-value answers in place by overwriting the value bytes; commands for
/// other channels or unknown command ids overwrite the command byte with
/// `CMD_UNHANDLED` so the host can fall through to its own handling.
pub fn handle_command(
    config: &mut AccelConfig,
    storage: &mut dyn ConfigStorage,
    data: &mut [u8],
) {
    if data.len() < 5 || data[1] != CHANNEL_ID {
        if !data.is_empty() {
            data[0] = CMD_UNHANDLED;
        }
        return;
    }

    match data[0] {
        CMD_SET_VALUE => {
            let raw = u16::from_be_bytes([data[3], data[4]]);
            set_value(config, data[2], raw, data[3]);
        }
        CMD_GET_VALUE => {
            let [hi, lo] = get_value(config, data[2]).to_be_bytes();
            data[3] = hi;
            data[4] = lo;
        }
        CMD_SAVE => {
            // Fire-and-forget: the protocol has no error channel.
            if let Err(err) = save_config(config, storage) {
                log::warn!("config save failed: {err:#}");
            }
        }
        _ => {
            data[0] = CMD_UNHANDLED;
        }
    }
}

fn set_value(config: &mut AccelConfig, value_id: u8, raw: u16, raw_byte: u8) {
    // Decoded values are clamped to each field's domain before they reach
    // the store: the setters reject out-of-range input rather than clamping,
    // and a rejected remote write would silently desync the remote tool.
    match value_id {
        ID_TAKEOFF => config.set_takeoff(CODEC_V1.takeoff.decode(raw).max(TAKEOFF_MIN)),
        ID_GROWTH_RATE => config.set_growth_rate(CODEC_V1.growth_rate.decode(raw).max(0.0)),
        ID_OFFSET => config.set_offset(CODEC_V1.offset.decode(raw)),
        ID_LIMIT => config.set_limit(CODEC_V1.limit.decode(raw).max(0.0)),
        ID_ENABLED => config.set_enabled(raw_byte != 0),
        _ => {}
    }
}

fn get_value(config: &AccelConfig, value_id: u8) -> u16 {
    match value_id {
        ID_TAKEOFF => CODEC_V1.takeoff.encode(config.takeoff()),
        ID_GROWTH_RATE => CODEC_V1.growth_rate.encode(config.growth_rate()),
        ID_OFFSET => CODEC_V1.offset.encode(config.offset()),
        ID_LIMIT => CODEC_V1.limit.encode(config.limit()),
        ID_ENABLED => config.enabled() as u16,
        _ => 0,
    }
}

/// Persisted record length: version byte, four u16 fields, enabled byte.
pub const RECORD_LEN: usize = 10;

/// Encode the whole store into its flat persistence record.
pub fn encode_record(config: &AccelConfig) -> [u8; RECORD_LEN] {
    let mut record = [0u8; RECORD_LEN];
    record[0] = CODEC_V1.version;
    record[1..3].copy_from_slice(&CODEC_V1.takeoff.encode(config.takeoff()).to_be_bytes());
    record[3..5].copy_from_slice(
        &CODEC_V1
            .growth_rate
            .encode(config.growth_rate())
            .to_be_bytes(),
    );
    record[5..7].copy_from_slice(&CODEC_V1.offset.encode(config.offset()).to_be_bytes());
    record[7..9].copy_from_slice(&CODEC_V1.limit.encode(config.limit()).to_be_bytes());
    record[9] = config.enabled() as u8;
    record
}

/// Decode a persisted record. None on length or version mismatch.
pub fn decode_record(record: &[u8]) -> Option<AccelConfig> {
    if record.len() != RECORD_LEN || record[0] != CODEC_V1.version {
        return None;
    }
    let field = |at: usize| u16::from_be_bytes([record[at], record[at + 1]]);

    let mut config = AccelConfig::new();
    config.set_takeoff(CODEC_V1.takeoff.decode(field(1)).max(TAKEOFF_MIN));
    config.set_growth_rate(CODEC_V1.growth_rate.decode(field(3)).max(0.0));
    config.set_offset(CODEC_V1.offset.decode(field(5)));
    config.set_limit(CODEC_V1.limit.decode(field(7)).max(0.0));
    config.set_enabled(record[9] != 0);
    Some(config)
}

/// Checkpoint the store to persistent storage.
pub fn save_config(
    config: &AccelConfig,
    storage: &mut dyn ConfigStorage,
) -> Result<(), anyhow::Error> {
    storage.write(&encode_record(config))
}

/// Restore the store from persistent storage at startup, falling back to
/// compiled-in defaults on a failed read or an unrecognizable record.
pub fn load_config(storage: &mut dyn ConfigStorage) -> AccelConfig {
    match storage.read() {
        Ok(record) => decode_record(&record).unwrap_or_else(|| {
            log::warn!("persisted config unrecognizable, using defaults");
            AccelConfig::new()
        }),
        Err(err) => {
            log::warn!("config read failed, using defaults: {err:#}");
            AccelConfig::new()
        }
    }
}

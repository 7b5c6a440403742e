use std::io::Write;

use anyhow::anyhow;
use omlox_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `omlox schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags, out: &mut dyn Write) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let schema = registry.get(&args.name).ok_or_else(|| {
        anyhow!(
            "unknown schema '{}' (available: {})",
            args.name,
            registry.list().join(", ")
        )
    })?;
    output(out, schema, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::raw_flags;

    #[test]
    fn prints_named_schema() {
        let mut out = Vec::new();
        let args = SchemaArgs {
            name: "trackable".into(),
        };
        handle(&args, &raw_flags(), &mut out).unwrap();

        let schema: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(schema["properties"]["geometry"].is_object());
    }

    #[test]
    fn unknown_name_lists_available_schemas() {
        let mut out = Vec::new();
        let args = SchemaArgs {
            name: "zone".into(),
        };
        let err = handle(&args, &raw_flags(), &mut out).unwrap_err();
        assert!(err.to_string().contains("geometry, location, trackable"));
    }
}

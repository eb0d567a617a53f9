//! Pure conversion functions: TOML config + CLI overrides -> crate API types.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use ecgnoise_io::{RecordFormat, RecordStore};
use ecgnoise_wavelet::{BandProcessor, BoundaryMode, OmissionSpec, Transform, Wavelet};

use crate::cli::CommonArgs;
use crate::config::{EcgConfig, IoToml, OmissionToml, WaveletToml};

/// Overwrites config values with every CLI option that was given.
pub fn apply_overrides(config: &mut EcgConfig, args: &CommonArgs) {
    if let Some(ref p) = args.manifest {
        config.io.manifest = p.clone();
    }
    if let Some(ref p) = args.records {
        config.io.records = p.clone();
    }
    if let Some(ref f) = args.format {
        config.io.format = f.clone();
    }
    if let Some(ref p) = args.output {
        config.io.output = Some(p.clone());
    }
    if let Some(ref w) = args.wavelet {
        config.wavelet.name = w.clone();
    }
    if let Some(l) = args.levels {
        config.wavelet.levels = l;
    }
    if let Some(ref m) = args.mode {
        config.wavelet.mode = m.clone();
    }
    if let Some(ref t) = args.transform {
        config.wavelet.transform = t.clone();
    }
}

/// `--omit` replaces the configured levels; `--omit-approx` switches the
/// approximation on.
pub fn apply_omission_overrides(config: &mut EcgConfig, omit: &[usize], omit_approx: bool) {
    if !omit.is_empty() {
        config.omission.levels = omit.to_vec();
    }
    if omit_approx {
        config.omission.approximation = true;
    }
}

/// Builds a [`BandProcessor`] from the wavelet section.
pub fn build_processor(w: &WaveletToml) -> Result<BandProcessor> {
    let wavelet = Wavelet::from_name(&w.name).context("invalid [wavelet].name")?;
    let mode = BoundaryMode::from_name(&w.mode).context("invalid [wavelet].mode")?;
    let transform = Transform::from_name(&w.transform).context("invalid [wavelet].transform")?;
    if w.levels == 0 {
        bail!("[wavelet].levels must be at least 1");
    }
    Ok(BandProcessor::new(wavelet, w.levels)
        .with_mode(mode)
        .with_transform(transform))
}

/// Builds the omission spec from the omission section.
pub fn build_omission(o: &OmissionToml) -> OmissionSpec {
    OmissionSpec::new(o.levels.iter().copied(), o.approximation)
}

/// Builds the record store from the I/O section.
pub fn build_store(io: &IoToml) -> Result<RecordStore> {
    let Some(format) = RecordFormat::from_name(&io.format) else {
        bail!("unknown record format: {:?}", io.format);
    };
    if !io.scale.is_finite() || io.scale == 0.0 {
        bail!("[io].scale must be finite and non-zero, got {}", io.scale);
    }
    Ok(RecordStore::open(
        format,
        &io.records,
        &io.variable,
        io.scale,
    ))
}

/// Manifest path; relative paths resolve against the record directory.
pub fn manifest_path(io: &IoToml) -> PathBuf {
    if io.manifest.is_absolute() {
        io.manifest.clone()
    } else {
        io.records.join(&io.manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn common() -> CommonArgs {
        CommonArgs {
            config: None,
            manifest: None,
            records: None,
            format: None,
            wavelet: None,
            levels: None,
            mode: None,
            transform: None,
            output: None,
        }
    }

    #[test]
    fn default_processor() {
        let p = build_processor(&WaveletToml::default()).unwrap();
        assert_eq!(p.wavelet(), Wavelet::Sym4);
        assert_eq!(p.levels(), 5);
        assert_eq!(p.mode(), BoundaryMode::Symmetric);
        assert_eq!(p.transform(), Transform::Decimated);
    }

    #[test]
    fn unknown_wavelet_is_error() {
        let w = WaveletToml {
            name: "morlet".into(),
            ..WaveletToml::default()
        };
        let err = build_processor(&w).unwrap_err();
        assert!(format!("{err:#}").contains("morlet"));
    }

    #[test]
    fn zero_levels_is_error() {
        let w = WaveletToml {
            levels: 0,
            ..WaveletToml::default()
        };
        assert!(build_processor(&w).is_err());
    }

    #[test]
    fn overrides_replace_config() {
        let mut config = EcgConfig::default();
        let args = CommonArgs {
            wavelet: Some("haar".into()),
            levels: Some(2),
            mode: Some("zero".into()),
            transform: Some("swt".into()),
            records: Some(PathBuf::from("/data/ecg")),
            output: Some(PathBuf::from("out.json")),
            ..common()
        };
        apply_overrides(&mut config, &args);
        apply_omission_overrides(&mut config, &[2], true);

        let p = build_processor(&config.wavelet).unwrap();
        assert_eq!(p.wavelet(), Wavelet::Haar);
        assert_eq!(p.levels(), 2);
        assert_eq!(p.mode(), BoundaryMode::Zero);
        assert_eq!(p.transform(), Transform::Stationary);
        assert_eq!(config.io.output, Some(PathBuf::from("out.json")));

        let spec = build_omission(&config.omission);
        assert!(spec.omits_approximation());
        assert_eq!(spec.levels().iter().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn absent_overrides_keep_config() {
        let mut config = EcgConfig::default();
        apply_overrides(&mut config, &common());
        apply_omission_overrides(&mut config, &[], false);
        assert_eq!(config.wavelet.name, "sym4");
        assert_eq!(config.omission.levels, vec![1]);
        assert!(!config.omission.approximation);
    }

    #[test]
    fn manifest_resolution() {
        let mut io = IoToml::default();
        assert_eq!(manifest_path(&io), PathBuf::from("training2017/RECORDS"));
        io.manifest = PathBuf::from("/lists/RECORDS");
        assert_eq!(manifest_path(&io), PathBuf::from("/lists/RECORDS"));
    }

    #[test]
    fn store_validation() {
        let mut io = IoToml::default();
        assert_eq!(build_store(&io).unwrap().format(), RecordFormat::Mat);
        io.format = "text".into();
        assert_eq!(build_store(&io).unwrap().format(), RecordFormat::Text);
        io.format = "edf".into();
        assert!(build_store(&io).is_err());
        io.format = "mat".into();
        io.scale = 0.0;
        assert!(build_store(&io).is_err());
    }
}

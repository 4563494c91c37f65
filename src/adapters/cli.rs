use clap::Parser;
use std::fs;
use std::io::{self, Read};
use tracing::level_filters::LevelFilter;

use crate::error::AppError;
use crate::eos::EvaluationSummary;
use crate::models::{EosConfig, Family};
use crate::polynomials::roquet::CoefficientSet;
use crate::precision::FloatPrecision;

#[derive(Parser, Debug)]
#[command(author, version, about = "Boussinesq seawater equations of state: density and its sensitivities at one point", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON file with an equation-of-state configuration; '-' reads from stdin"
    )]
    config: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON configuration (overrides --config)"
    )]
    config_json: Option<String>,
    #[arg(long, value_name = "FAMILY", help = "Polynomial family: roquet or teos10")]
    family: Option<Family>,
    #[arg(
        long,
        value_name = "NAME",
        help = "Second-order coefficient set, e.g. SecondOrder or SimplestRealistic"
    )]
    coefficient_set: Option<CoefficientSet>,
    #[arg(long, value_name = "PRECISION", help = "Working precision: f32 or f64")]
    precision: Option<FloatPrecision>,
    #[arg(long, value_name = "KG_M3", help = "Reference density in kg/m^3")]
    reference_density: Option<f64>,
    #[arg(long, value_name = "DEG_C", allow_hyphen_values = true, help = "Conservative temperature in °C")]
    theta: Option<f64>,
    #[arg(long, value_name = "G_KG", allow_hyphen_values = true, help = "Absolute salinity in g/kg")]
    salinity: Option<f64>,
    #[arg(
        long,
        value_name = "M",
        allow_hyphen_values = true,
        help = "Geopotential height in m, negative below the surface"
    )]
    z: Option<f64>,
    #[arg(short, long, action = clap::ArgAction::Count, help = "Log construction details to stderr (-v, -vv)")]
    verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn parse_config_doc(doc: &str) -> Result<EosConfig, AppError> {
    serde_json::from_str(doc).map_err(|source| AppError::ParseConfigDocument { source })
}

/// Reads the configuration document, then applies the individual flags on top.
pub fn parse_config(args: &Args) -> Result<EosConfig, AppError> {
    let mut config = match (&args.config_json, &args.config) {
        (Some(json), _) => {
            serde_json::from_str(json).map_err(|source| AppError::ParseConfigJson { source })?
        }
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_config_doc(&s)?
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_config_doc(&s)?
        }
        (None, None) => EosConfig::default(),
    };

    if let Some(family) = args.family {
        config.family = family;
    }
    if let Some(set) = args.coefficient_set {
        config.coefficient_set = Some(set);
    }
    if let Some(precision) = args.precision {
        config.precision = precision;
    }
    if let Some(reference_density) = args.reference_density {
        config.reference_density = Some(reference_density);
    }
    Ok(config)
}

pub fn parse_point(args: &Args) -> Result<(f64, f64, f64), AppError> {
    match (args.theta, args.salinity, args.z) {
        (Some(theta), Some(sa), Some(z)) => Ok((theta, sa, z)),
        _ => Err(AppError::MissingPoint),
    }
}

pub fn print_output(out: &EvaluationSummary, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(&out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
    } else {
        println!("Equation of state: {} ({})", out.family, out.precision);
        println!("Polynomial: {}", out.polynomial);
        println!("Reference density: {:.4} kg/m^3", out.reference_density);
        println!("Density: {:.6} kg/m^3", out.density);
        println!("Density anomaly: {:.6} kg/m^3", out.density_anomaly);
        println!("Thermal sensitivity: {:.9} kg/m^3/K", out.thermal_sensitivity);
        println!("Thermal expansion: {:.6e} 1/K", out.thermal_expansion);
        println!("Haline sensitivity: {:.9} kg/m^3/(g/kg)", out.haline_sensitivity);
        println!("Haline contraction: {:.6e} 1/(g/kg)", out.haline_contraction);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_the_config_document() {
        let args = Args::parse_from([
            "seawater_polynomials",
            "--config-json",
            r#"{"family":"roquet","coefficient_set":"Linear","reference_density":1025.0}"#,
            "--coefficient-set",
            "Cabbeling",
            "--precision",
            "f32",
        ]);
        let config = parse_config(&args).unwrap();
        assert_eq!(config.coefficient_set, Some(CoefficientSet::Cabbeling));
        assert_eq!(config.precision, FloatPrecision::F32);
        assert_eq!(config.reference_density, Some(1025.0));
    }

    #[test]
    fn negative_depth_is_accepted() {
        let args = Args::parse_from([
            "seawater_polynomials",
            "--theta",
            "-1.5",
            "--salinity",
            "34.7",
            "--z",
            "-4000",
        ]);
        assert_eq!(parse_point(&args).unwrap(), (-1.5, 34.7, -4000.0));
    }

    #[test]
    fn incomplete_point_is_reported() {
        let args = Args::parse_from(["seawater_polynomials", "--theta", "10"]);
        assert!(matches!(parse_point(&args), Err(AppError::MissingPoint)));
    }
}

//! Coefficient tables of the 55-term TEOS-10 polynomial.
//!
//! Field names follow the degree subscripts `ijk`: power `i` of the reduced
//! salinity `s`, power `j` of the reduced temperature `τ`, power `k` of the
//! reduced depth `ζ`. One table per precision; the `f32` table is its own set
//! of literals and must not be produced by casting the `f64` one.

#![allow(clippy::excessive_precision, clippy::inconsistent_digit_grouping)]

/// Scales that map `(Θ, Sᴬ, Z)` onto the reduced coordinates `(τ, s, ζ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceScales<T> {
    /// Temperature scale Θᵤ [°C].
    pub theta_u: T,
    /// Depth scale Zᵤ [m].
    pub z_u: T,
    /// Salinity offset ΔS [g/kg].
    pub delta_s: T,
    /// Salinity scale Sᴬᵤ = 40·35.16504/35 [g/kg].
    pub sa_u: T,
}

/// Coefficients of the vertical reference profile `r₀(ζ)`; `r0k` multiplies `ζ^(k+1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileCoefficients<T> {
    pub r00: T,
    pub r01: T,
    pub r02: T,
    pub r03: T,
    pub r04: T,
    pub r05: T,
}

/// Coefficients of the density anomaly fit `r′(τ, s, ζ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyCoefficients<T> {
    // ζ^0
    pub c000: T,
    pub c100: T,
    pub c200: T,
    pub c300: T,
    pub c400: T,
    pub c500: T,
    pub c600: T,
    pub c010: T,
    pub c110: T,
    pub c210: T,
    pub c310: T,
    pub c410: T,
    pub c510: T,
    pub c020: T,
    pub c120: T,
    pub c220: T,
    pub c320: T,
    pub c420: T,
    pub c030: T,
    pub c130: T,
    pub c230: T,
    pub c330: T,
    pub c040: T,
    pub c140: T,
    pub c240: T,
    pub c050: T,
    pub c150: T,
    pub c060: T,

    // ζ^1
    pub c001: T,
    pub c101: T,
    pub c201: T,
    pub c301: T,
    pub c401: T,
    pub c011: T,
    pub c111: T,
    pub c211: T,
    pub c311: T,
    pub c021: T,
    pub c121: T,
    pub c221: T,
    pub c031: T,
    pub c131: T,
    pub c041: T,

    // ζ^2
    pub c002: T,
    pub c102: T,
    pub c202: T,
    pub c012: T,
    pub c112: T,
    pub c022: T,

    // ζ^3
    pub c003: T,
    pub c103: T,
    pub c013: T,
}

/// Coefficients of a derivative fit: the thermal table `a(τ, s, ζ)` and the
/// salinity-normalized haline table `b(τ, s, ζ)` share this layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivativeCoefficients<T> {
    // ζ^0
    pub c000: T,
    pub c100: T,
    pub c200: T,
    pub c300: T,
    pub c400: T,
    pub c500: T,
    pub c010: T,
    pub c110: T,
    pub c210: T,
    pub c310: T,
    pub c410: T,
    pub c020: T,
    pub c120: T,
    pub c220: T,
    pub c320: T,
    pub c030: T,
    pub c130: T,
    pub c230: T,
    pub c040: T,
    pub c140: T,
    pub c050: T,

    // ζ^1
    pub c001: T,
    pub c101: T,
    pub c201: T,
    pub c301: T,
    pub c011: T,
    pub c111: T,
    pub c211: T,
    pub c021: T,
    pub c121: T,
    pub c031: T,

    // ζ^2
    pub c002: T,
    pub c102: T,
    pub c012: T,

    // ζ^3
    pub c003: T,
}

/// Everything the TEOS-10 evaluator needs for one precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Teos10Coefficients<T> {
    pub scales: ReferenceScales<T>,
    pub profile: ProfileCoefficients<T>,
    pub anomaly: AnomalyCoefficients<T>,
    pub thermal: DerivativeCoefficients<T>,
    pub haline: DerivativeCoefficients<T>,
}

pub(crate) static TEOS10_F64: Teos10Coefficients<f64> = Teos10Coefficients {
    scales: ReferenceScales {
        theta_u: 40.0,
        z_u: 1.0e4,
        delta_s: 32.0,
        sa_u: 40.188_617_142_857_14,
    },
    profile: ProfileCoefficients {
        r00: 4.649_497_707_2e1,
        r01: -5.209_996_252_5,
        r02: 2.260_190_070_8e-1,
        r03: 6.432_677_256_9e-2,
        r04: 1.561_699_550_3e-2,
        r05: -1.724_370_899_1e-3,
    },
    anomaly: AnomalyCoefficients {
        c000: 8.018_961_574_6e2,
        c100: 8.667_240_816_5e2,
        c200: -1.786_468_263_7e3,
        c300: 2.037_529_554_6e3,
        c400: -1.284_916_107_1e3,
        c500: 4.322_758_568_4e2,
        c600: -6.057_991_661_2e1,
        c010: 2.601_014_506_8e1,
        c110: -6.528_188_526_5e1,
        c210: 8.177_042_510_8e1,
        c310: -5.688_804_632_1e1,
        c410: 1.768_181_411_4e1,
        c510: -1.919_350_219_5,
        c020: -3.707_417_041_7e1,
        c120: 6.154_825_812_7e1,
        c220: -6.036_255_150_1e1,
        c320: 2.913_002_125_3e1,
        c420: -5.472_369_273_9,
        c030: 2.166_178_952_9e1,
        c130: -3.344_910_846_9e1,
        c230: 1.971_707_846_6e1,
        c330: -3.174_294_653_2,
        c040: -8.362_788_546_7,
        c140: 1.131_153_858_4e1,
        c240: -5.356_330_404_5,
        c050: 5.404_872_379_1e-1,
        c150: 4.816_998_016_3e-1,
        c060: -1.908_356_888_8e-1,
        c001: 1.968_192_520_9e1,
        c101: -4.254_999_821_4e1,
        c201: 5.077_476_821_8e1,
        c301: -3.093_807_633_4e1,
        c401: 6.605_175_309_7,
        c011: -1.333_630_111_3e1,
        c111: -4.487_011_457_5,
        c211: 5.004_259_806_1,
        c311: -6.539_904_366_4e-1,
        c021: 6.708_047_960_3,
        c121: 3.506_308_127_9,
        c221: -1.879_537_299_6,
        c031: -2.464_966_953_4,
        c131: -5.507_710_127_9e-1,
        c041: 5.592_793_597e-1,
        c002: 2.066_092_417_5,
        c102: -4.952_760_398_9,
        c202: 2.501_963_324_4,
        c012: 2.056_431_149_9,
        c112: -2.131_136_551_8e-1,
        c022: -1.241_998_302_6,
        c003: -2.334_275_879_7e-2,
        c103: -1.850_763_671_8e-2,
        c013: 3.796_982_045_5e-1,
    },
    thermal: DerivativeCoefficients {
        c000: -6.502_536_267e-1,
        c100: 1.632_047_131_6,
        c200: -2.044_260_627_7,
        c300: 1.422_201_158,
        c400: -4.420_453_528_4e-1,
        c500: 4.798_375_548_7e-2,
        c010: 1.853_708_520_9,
        c110: -3.077_412_906_4,
        c210: 3.018_127_575_1,
        c310: -1.456_501_062_6,
        c410: 2.736_184_637e-1,
        c020: -1.624_634_214_7,
        c120: 2.508_683_135_2,
        c220: -1.478_780_884_9,
        c320: 2.380_720_989_9e-1,
        c030: 8.362_788_546_7e-1,
        c130: -1.131_153_858_4,
        c230: 5.356_330_404_5e-1,
        c040: -6.756_090_473_9e-2,
        c140: -6.021_247_520_4e-2,
        c050: 2.862_535_333_3e-2,
        c001: 3.334_075_278_2e-1,
        c101: 1.121_752_864_4e-1,
        c201: -1.251_064_951_5e-1,
        c301: 1.634_976_091_6e-2,
        c011: -3.354_023_980_2e-1,
        c111: -1.753_154_064e-1,
        c211: 9.397_686_498_1e-2,
        c021: 1.848_725_215e-1,
        c121: 4.130_782_595_9e-2,
        c031: -5.592_793_597e-2,
        c002: -5.141_077_874_8e-2,
        c102: 5.327_841_379_4e-3,
        c012: 6.209_991_513_2e-2,
        c003: -9.492_455_113_8e-3,
    },
    haline: DerivativeCoefficients {
        c000: 1.078_320_359_4e1,
        c100: -4.445_209_590_8e1,
        c200: 7.604_875_582e1,
        c300: -6.394_428_066_8e1,
        c400: 2.689_044_109_8e1,
        c500: -4.522_169_777_3,
        c010: -8.121_937_243_2e-1,
        c110: 2.034_666_304_1,
        c210: -2.123_289_517,
        c310: 8.799_414_048_5e-1,
        c410: -1.193_963_836e-1,
        c020: 7.657_424_228_9e-1,
        c120: -1.501_981_302,
        c220: 1.087_248_952_2,
        c320: -2.723_342_908e-1,
        c030: -4.161_515_230_8e-1,
        c130: 4.906_135_086_9e-1,
        c230: -1.184_773_778_8e-1,
        c040: 1.407_306_270_8e-1,
        c140: -1.332_797_887_9e-1,
        c050: 5.992_988_013_4e-3,
        c001: -5.293_787_300_9e-1,
        c101: 1.263_411_677_9,
        c201: -1.154_732_802_5,
        c301: 3.287_087_627_9e-1,
        c011: -5.582_440_721_4e-2,
        c111: 1.245_193_331_3e-1,
        c211: -2.440_953_993_2e-2,
        c021: 4.362_314_975_2e-2,
        c121: -4.676_790_179e-2,
        c031: -6.852_326_006e-3,
        c002: -6.161_894_525_1e-2,
        c102: 6.225_552_164_4e-2,
        c012: -2.651_418_116_9e-3,
        c003: -2.302_596_858_7e-4,
    },
};

pub(crate) static TEOS10_F32: Teos10Coefficients<f32> = Teos10Coefficients {
    scales: ReferenceScales {
        theta_u: 40.0,
        z_u: 1.0e4,
        delta_s: 32.0,
        sa_u: 4.018_861_7e1,
    },
    profile: ProfileCoefficients {
        r00: 4.649_497_7e1,
        r01: -5.209_996_3,
        r02: 2.260_190_1e-1,
        r03: 6.432_677_3e-2,
        r04: 1.561_699_6e-2,
        r05: -1.724_370_9e-3,
    },
    anomaly: AnomalyCoefficients {
        c000: 8.018_961_6e2,
        c100: 8.667_240_8e2,
        c200: -1.786_468_3e3,
        c300: 2.037_529_6e3,
        c400: -1.284_916_1e3,
        c500: 4.322_758_6e2,
        c600: -6.057_991_7e1,
        c010: 2.601_014_5e1,
        c110: -6.528_188_5e1,
        c210: 8.177_042_5e1,
        c310: -5.688_804_6e1,
        c410: 1.768_181_4e1,
        c510: -1.919_350_2,
        c020: -3.707_417e1,
        c120: 6.154_825_8e1,
        c220: -6.036_255_2e1,
        c320: 2.913_002_1e1,
        c420: -5.472_369_3,
        c030: 2.166_179e1,
        c130: -3.344_910_8e1,
        c230: 1.971_707_8e1,
        c330: -3.174_294_7,
        c040: -8.362_788_5,
        c140: 1.131_153_9e1,
        c240: -5.356_330_4,
        c050: 5.404_872_4e-1,
        c150: 4.816_998e-1,
        c060: -1.908_356_9e-1,
        c001: 1.968_192_5e1,
        c101: -4.254_999_8e1,
        c201: 5.077_476_8e1,
        c301: -3.093_807_6e1,
        c401: 6.605_175_3,
        c011: -1.333_630_1e1,
        c111: -4.487_011_5,
        c211: 5.004_259_8,
        c311: -6.539_904_4e-1,
        c021: 6.708_048,
        c121: 3.506_308_1,
        c221: -1.879_537_3,
        c031: -2.464_967,
        c131: -5.507_710_1e-1,
        c041: 5.592_793_6e-1,
        c002: 2.066_092_4,
        c102: -4.952_760_4,
        c202: 2.501_963_3,
        c012: 2.056_431_1,
        c112: -2.131_136_6e-1,
        c022: -1.241_998_3,
        c003: -2.334_275_9e-2,
        c103: -1.850_763_7e-2,
        c013: 3.796_982e-1,
    },
    thermal: DerivativeCoefficients {
        c000: -6.502_536_3e-1,
        c100: 1.632_047_1,
        c200: -2.044_260_6,
        c300: 1.422_201_2,
        c400: -4.420_453_5e-1,
        c500: 4.798_375_5e-2,
        c010: 1.853_708_5,
        c110: -3.077_412_9,
        c210: 3.018_127_6,
        c310: -1.456_501_1,
        c410: 2.736_184_6e-1,
        c020: -1.624_634_2,
        c120: 2.508_683_1,
        c220: -1.478_780_9,
        c320: 2.380_721e-1,
        c030: 8.362_788_5e-1,
        c130: -1.131_153_9,
        c230: 5.356_330_4e-1,
        c040: -6.756_090_5e-2,
        c140: -6.021_247_5e-2,
        c050: 2.862_535_3e-2,
        c001: 3.334_075_3e-1,
        c101: 1.121_752_9e-1,
        c201: -1.251_065e-1,
        c301: 1.634_976_1e-2,
        c011: -3.354_024e-1,
        c111: -1.753_154_1e-1,
        c211: 9.397_686_5e-2,
        c021: 1.848_725_2e-1,
        c121: 4.130_782_6e-2,
        c031: -5.592_793_6e-2,
        c002: -5.141_077_9e-2,
        c102: 5.327_841_4e-3,
        c012: 6.209_991_5e-2,
        c003: -9.492_455_1e-3,
    },
    haline: DerivativeCoefficients {
        c000: 1.078_320_4e1,
        c100: -4.445_209_6e1,
        c200: 7.604_875_6e1,
        c300: -6.394_428_1e1,
        c400: 2.689_044_1e1,
        c500: -4.522_169_8,
        c010: -8.121_937_2e-1,
        c110: 2.034_666_3,
        c210: -2.123_289_5,
        c310: 8.799_414e-1,
        c410: -1.193_963_8e-1,
        c020: 7.657_424_2e-1,
        c120: -1.501_981_3,
        c220: 1.087_249,
        c320: -2.723_342_9e-1,
        c030: -4.161_515_2e-1,
        c130: 4.906_135_1e-1,
        c230: -1.184_773_8e-1,
        c040: 1.407_306_3e-1,
        c140: -1.332_797_9e-1,
        c050: 5.992_988e-3,
        c001: -5.293_787_3e-1,
        c101: 1.263_411_7,
        c201: -1.154_732_8,
        c301: 3.287_087_6e-1,
        c011: -5.582_440_7e-2,
        c111: 1.245_193_3e-1,
        c211: -2.440_954e-2,
        c021: 4.362_315e-2,
        c121: -4.676_790_2e-2,
        c031: -6.852_326e-3,
        c002: -6.161_894_5e-2,
        c102: 6.225_552_2e-2,
        c012: -2.651_418_1e-3,
        c003: -2.302_596_9e-4,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salinity_scale_matches_definition() {
        let sa_u = 40.0 * 35.165_04 / 35.0;
        assert!((TEOS10_F64.scales.sa_u - sa_u).abs() < 1e-12);
        assert!((f64::from(TEOS10_F32.scales.sa_u) - sa_u).abs() < 1e-5);
    }

    #[test]
    fn thermal_table_is_the_temperature_derivative_of_the_anomaly_table() {
        // a = -∂r′/∂Θ, so c000 of the thermal table is -c010/Θᵤ of the anomaly table.
        let t = &TEOS10_F64;
        let expected = -t.anomaly.c010 / t.scales.theta_u;
        assert!((t.thermal.c000 - expected).abs() < 1e-10);
        let expected = -2.0 * t.anomaly.c021 / t.scales.theta_u;
        assert!((t.thermal.c011 - expected).abs() < 1e-10);
    }

    #[test]
    fn haline_table_is_the_salinity_derivative_of_the_anomaly_table() {
        // b = s·∂r′/∂Sᴬ = (∂r′/∂s) / (2 Sᴬᵤ).
        let t = &TEOS10_F64;
        let two_sa_u = 2.0 * t.scales.sa_u;
        assert!((t.haline.c000 - t.anomaly.c100 / two_sa_u).abs() < 1e-9);
        assert!((t.haline.c031 - t.anomaly.c131 / two_sa_u).abs() < 1e-9);
        assert!((t.haline.c301 - 4.0 * t.anomaly.c401 / two_sa_u).abs() < 1e-9);
    }
}

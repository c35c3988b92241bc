//! Enumerations for the landscape parameter model.
//!
//! Every enumeration here serializes as a `snake_case` symbolic name and
//! deserializes from either that name or the small-integer index used by
//! serialized parameter sets. The index spaces are fixed and must not be
//! reordered.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Shared behavior for enumerations addressable by name or index.
pub trait ParamEnum: Sized + Copy + 'static {
    /// Human-readable kind, used in error messages ("noise_type", "basis", ...).
    const KIND: &'static str;

    /// All variants in index order.
    fn all() -> &'static [Self];

    /// Returns the symbolic `snake_case` name.
    fn as_str(&self) -> &'static str;

    /// Resolves a variant from its fixed integer index.
    fn from_index(index: u8) -> Option<Self> {
        Self::all().get(index as usize).copied()
    }

    /// Resolves a variant from its symbolic name.
    fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == name)
    }
}

/// Accepts either a symbolic name or an integer index.
#[derive(Deserialize)]
#[serde(untagged)]
enum NameOrIndex {
    Index(u64),
    Name(String),
}

fn deserialize_param_enum<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: ParamEnum,
{
    match NameOrIndex::deserialize(deserializer)? {
        NameOrIndex::Index(i) => u8::try_from(i)
            .ok()
            .and_then(T::from_index)
            .ok_or_else(|| de::Error::custom(format!("unknown {} index: {}", T::KIND, i))),
        NameOrIndex::Name(name) => T::from_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown {} name: {}", T::KIND, name))),
    }
}

macro_rules! impl_param_enum {
    ($ty:ident, $kind:literal, [$(($variant:ident, $name:literal)),+ $(,)?]) => {
        impl ParamEnum for $ty {
            const KIND: &'static str = $kind;

            fn all() -> &'static [Self] {
                &[$($ty::$variant),+]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| format!("unknown {}: {}", $kind, s))
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserialize_param_enum(deserializer)
            }
        }
    };
}

/// Output mesh topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    /// Planar rectangular lattice.
    Grid,
    /// Displaced UV sphere.
    Sphere,
}

impl_param_enum!(MeshKind, "mesh kind", [(Grid, "grid"), (Sphere, "sphere")]);

/// The seventeen composer kernels. Index order is the serialized id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoiseType {
    /// Musgrave multifractal, scaled by 0.5.
    MultiFractal,
    /// Ridged multifractal with offset and gain, scaled by 0.5.
    RidgedMultiFractal,
    /// Hybrid multifractal with offset and gain, scaled by 0.5.
    HybridMultiFractal,
    /// Heterogeneous terrain, scaled by 0.25.
    HeteroTerrain,
    /// Plain fractional Brownian motion.
    Fractal,
    /// First component of a turbulence vector.
    TurbulenceVector,
    /// Distorted-domain noise (variable lacunarity).
    VariableLacunarity,
    /// Shape-modulated marble with bias and sharpness filters.
    MarbleNoise,
    /// Turbulence-displaced heterogeneous terrain.
    ShatteredHterrain,
    /// Heterogeneous terrain with a sine layering term.
    StrataHterrain,
    /// Double turbulence with fixed probe offsets.
    AntTurbulence,
    /// Turbulence-displaced distorted-domain noise.
    VlNoiseTurbulence,
    /// Heterogeneous terrain modulated by distorted-domain noise.
    VlHterrain,
    /// Heterogeneous terrain displaced by a second hetero-terrain pass.
    DistortedHeteroTerrain,
    /// Sum of squares of two multifractal passes.
    DoubleMultiFractal,
    /// Multifractal-displaced ridged multifractal.
    SlickRock,
    /// Chained turbulence triple, z component rescaled to [0, 1].
    PlanetNoise,
}

impl_param_enum!(
    NoiseType,
    "noise_type",
    [
        (MultiFractal, "multi_fractal"),
        (RidgedMultiFractal, "ridged_multi_fractal"),
        (HybridMultiFractal, "hybrid_multi_fractal"),
        (HeteroTerrain, "hetero_terrain"),
        (Fractal, "fractal"),
        (TurbulenceVector, "turbulence_vector"),
        (VariableLacunarity, "variable_lacunarity"),
        (MarbleNoise, "marble_noise"),
        (ShatteredHterrain, "shattered_hterrain"),
        (StrataHterrain, "strata_hterrain"),
        (AntTurbulence, "ant_turbulence"),
        (VlNoiseTurbulence, "vl_noise_turbulence"),
        (VlHterrain, "vl_hterrain"),
        (DistortedHeteroTerrain, "distorted_hetero_terrain"),
        (DoubleMultiFractal, "double_multi_fractal"),
        (SlickRock, "slick_rock"),
        (PlanetNoise, "planet_noise"),
    ]
);

/// Primitive noise bases. Index order is the serialized id space; the
/// historical internal remap of index 9 to id 14 is absorbed by the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basis {
    /// Lattice value noise ("Blender default").
    BlenderOriginal,
    /// Original Perlin gradient noise (hermite fade).
    OriginalPerlin,
    /// Improved Perlin gradient noise (quintic fade).
    ImprovedPerlin,
    /// Distance to the nearest jittered lattice point.
    VoronoiF1,
    /// Distance to the second-nearest point.
    VoronoiF2,
    /// Distance to the third-nearest point.
    VoronoiF3,
    /// Distance to the fourth-nearest point.
    VoronoiF4,
    /// F2 minus F1 (cell edges).
    VoronoiF2F1,
    /// Saturated edge distance (crackle).
    VoronoiCrackle,
    /// Piecewise-constant per-cell hash.
    CellNoise,
}

impl_param_enum!(
    Basis,
    "basis",
    [
        (BlenderOriginal, "blender_original"),
        (OriginalPerlin, "original_perlin"),
        (ImprovedPerlin, "improved_perlin"),
        (VoronoiF1, "voronoi_f1"),
        (VoronoiF2, "voronoi_f2"),
        (VoronoiF3, "voronoi_f3"),
        (VoronoiF4, "voronoi_f4"),
        (VoronoiF2F1, "voronoi_f2f1"),
        (VoronoiCrackle, "voronoi_crackle"),
        (CellNoise, "cell_noise"),
    ]
);

/// Turbulence accumulation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HardNoise {
    /// Signed octaves.
    Soft,
    /// Absolute-value octaves (billowy).
    Hard,
}

impl HardNoise {
    /// Whether octaves are folded through `abs`.
    pub fn is_hard(&self) -> bool {
        matches!(self, HardNoise::Hard)
    }
}

impl_param_enum!(HardNoise, "hard_noise", [(Soft, "soft"), (Hard, "hard")]);

/// Edge falloff mode for grid meshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Falloff {
    /// No boundary attenuation.
    None,
    /// Attenuate along Y only.
    Y,
    /// Attenuate along X only.
    X,
    /// Radial attenuation along both axes.
    Xy,
}

impl_param_enum!(
    Falloff,
    "falloff",
    [(None, "none"), (Y, "y"), (X, "x"), (Xy, "xy")]
);

/// Terracing post-filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrataType {
    /// No layering.
    None,
    /// Smooth sine layering.
    Smooth,
    /// Sharp layering, sine term subtracted.
    SharpSub,
    /// Sharp layering, sine term added.
    SharpAdd,
    /// Hard quantization into layers.
    Quantize,
    /// 50/50 blend of quantized and continuous height.
    QuantizeMix,
}

impl_param_enum!(
    StrataType,
    "strata_type",
    [
        (None, "none"),
        (Smooth, "smooth"),
        (SharpSub, "sharp_sub"),
        (SharpAdd, "sharp_add"),
        (Quantize, "quantize"),
        (QuantizeMix, "quantize_mix"),
    ]
);

/// Periodic fold applied to the marble shape value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarbleBias {
    Sin,
    Cos,
    Tri,
    Saw,
}

impl_param_enum!(
    MarbleBias,
    "marble_bias",
    [(Sin, "sin"), (Cos, "cos"), (Tri, "tri"), (Saw, "saw")]
);

/// Sharpness filter applied after the marble bias fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarbleSharp {
    Soft,
    Sharp,
    Sharper,
    SoftInv,
    SharpInv,
    SharperInv,
}

impl_param_enum!(
    MarbleSharp,
    "marble_sharp",
    [
        (Soft, "soft"),
        (Sharp, "sharp"),
        (Sharper, "sharper"),
        (SoftInv, "soft_inv"),
        (SharpInv, "sharp_inv"),
        (SharperInv, "sharper_inv"),
    ]
);

/// Shape function feeding the marble bias fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarbleShape {
    /// Linear gradient along all axes.
    Default,
    /// Radial distance rings.
    Ring,
    /// Angular swirl around the z axis.
    Swirl,
    /// Cosine bumps.
    Bumps,
    /// Sine wave bands.
    Wave,
    /// Gradient along y.
    YGradient,
    /// Gradient along x.
    XGradient,
    /// Gradient along z.
    ZGradient,
}

impl_param_enum!(
    MarbleShape,
    "marble_shape",
    [
        (Default, "default"),
        (Ring, "ring"),
        (Swirl, "swirl"),
        (Bumps, "bumps"),
        (Wave, "wave"),
        (YGradient, "y_gradient"),
        (XGradient, "x_gradient"),
        (ZGradient, "z_gradient"),
    ]
);

/// Weighting mode for the slope-to-weight operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlopeMode {
    /// Weight is the z component of the vertex normal.
    Planar,
    /// Weight compares the normal against the radial direction.
    Spherical,
}

impl_param_enum!(
    SlopeMode,
    "slope_mode",
    [(Planar, "planar"), (Spherical, "spherical")]
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_type_index_space() {
        assert_eq!(NoiseType::from_index(0), Some(NoiseType::MultiFractal));
        assert_eq!(NoiseType::from_index(7), Some(NoiseType::MarbleNoise));
        assert_eq!(NoiseType::from_index(16), Some(NoiseType::PlanetNoise));
        assert_eq!(NoiseType::from_index(17), None);
        assert_eq!(NoiseType::all().len(), 17);
    }

    #[test]
    fn test_basis_index_space() {
        assert_eq!(Basis::from_index(0), Some(Basis::BlenderOriginal));
        assert_eq!(Basis::from_index(9), Some(Basis::CellNoise));
        assert_eq!(Basis::from_index(10), None);
        assert_eq!(Basis::all().len(), 10);
    }

    #[test]
    fn test_name_round_trip() {
        for nt in NoiseType::all() {
            assert_eq!(NoiseType::from_name(nt.as_str()), Some(*nt));
        }
        for b in Basis::all() {
            assert_eq!(Basis::from_name(b.as_str()), Some(*b));
        }
    }

    #[test]
    fn test_deserialize_from_name_and_index() {
        let from_name: NoiseType = serde_json::from_str("\"slick_rock\"").unwrap();
        let from_index: NoiseType = serde_json::from_str("15").unwrap();
        assert_eq!(from_name, NoiseType::SlickRock);
        assert_eq!(from_index, NoiseType::SlickRock);

        let falloff: Falloff = serde_json::from_str("3").unwrap();
        assert_eq!(falloff, Falloff::Xy);
    }

    #[test]
    fn test_deserialize_rejects_unknown() {
        assert!(serde_json::from_str::<Basis>("\"simplex\"").is_err());
        assert!(serde_json::from_str::<Basis>("12").is_err());
        assert!(serde_json::from_str::<StrataType>("6").is_err());
    }

    #[test]
    fn test_serialize_as_name() {
        assert_eq!(
            serde_json::to_string(&Basis::VoronoiF2F1).unwrap(),
            "\"voronoi_f2f1\""
        );
        assert_eq!(
            serde_json::to_string(&NoiseType::HeteroTerrain).unwrap(),
            "\"hetero_terrain\""
        );
    }
}

// File: src/core/gematria/method.rs
use crate::error::HebrewError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A gematria computation method.
///
/// Simple methods sum a per-letter value table. Composite methods layer extra
/// arithmetic on top of the standard (Hechrachi) values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GematriaMethod {
    #[default]
    MisparHechrachi,
    /// Finals take 500-900.
    MisparGadol,
    /// Ordinal position, finals 23-27.
    MisparSiduri,
    /// Hechrachi with the zeros dropped.
    MisparKatan,
    MisparPerati,
    Atbash,
    Albam,
    MisparMeshulash,
    /// Sum of the Hechrachi values of the letter and all letters before it.
    MisparKidmi,
    /// Value of the number word the letter stands for (א = אחד = 13).
    MisparMispari,
    AyakBachar,
    /// Value of the last letter of the letter's name.
    Ofanim,
    AchasBeta,
    Avgad,
    ReverseAvgad,

    /// Hechrachi plus the number of letters.
    MisparMusafi,
    /// Hechrachi plus the number of words.
    MisparKolel,
    /// Hechrachi value of each letter's spelled-out name.
    MisparShemiMilui,
    /// Like Shemi Milui with the letter itself left out of its name.
    MisparNeelam,
    MisparBoneeh,
    MisparHamerubahHaklali,
    MisparHaachor,
    /// Digit root of the Hechrachi value.
    MisparKatanMispari,
}

impl GematriaMethod {
    pub const ALL: [GematriaMethod; 23] = [
        GematriaMethod::MisparHechrachi,
        GematriaMethod::MisparGadol,
        GematriaMethod::MisparSiduri,
        GematriaMethod::MisparKatan,
        GematriaMethod::MisparPerati,
        GematriaMethod::Atbash,
        GematriaMethod::Albam,
        GematriaMethod::MisparMeshulash,
        GematriaMethod::MisparKidmi,
        GematriaMethod::MisparMispari,
        GematriaMethod::AyakBachar,
        GematriaMethod::Ofanim,
        GematriaMethod::AchasBeta,
        GematriaMethod::Avgad,
        GematriaMethod::ReverseAvgad,
        GematriaMethod::MisparMusafi,
        GematriaMethod::MisparKolel,
        GematriaMethod::MisparShemiMilui,
        GematriaMethod::MisparNeelam,
        GematriaMethod::MisparBoneeh,
        GematriaMethod::MisparHamerubahHaklali,
        GematriaMethod::MisparHaachor,
        GematriaMethod::MisparKatanMispari,
    ];

    /// Stable identifier, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            GematriaMethod::MisparHechrachi => "mispar_hechrachi",
            GematriaMethod::MisparGadol => "mispar_gadol",
            GematriaMethod::MisparSiduri => "mispar_siduri",
            GematriaMethod::MisparKatan => "mispar_katan",
            GematriaMethod::MisparPerati => "mispar_perati",
            GematriaMethod::Atbash => "atbash",
            GematriaMethod::Albam => "albam",
            GematriaMethod::MisparMeshulash => "mispar_meshulash",
            GematriaMethod::MisparKidmi => "mispar_kidmi",
            GematriaMethod::MisparMispari => "mispar_mispari",
            GematriaMethod::AyakBachar => "ayak_bachar",
            GematriaMethod::Ofanim => "ofanim",
            GematriaMethod::AchasBeta => "achas_beta",
            GematriaMethod::Avgad => "avgad",
            GematriaMethod::ReverseAvgad => "reverse_avgad",
            GematriaMethod::MisparMusafi => "mispar_musafi",
            GematriaMethod::MisparKolel => "mispar_kolel",
            GematriaMethod::MisparShemiMilui => "mispar_shemi_milui",
            GematriaMethod::MisparNeelam => "mispar_neelam",
            GematriaMethod::MisparBoneeh => "mispar_boneeh",
            GematriaMethod::MisparHamerubahHaklali => "mispar_hamerubah_haklali",
            GematriaMethod::MisparHaachor => "mispar_haachor",
            GematriaMethod::MisparKatanMispari => "mispar_katan_mispari",
        }
    }

    /// True when the method is a plain sum over a value table.
    pub fn is_simple(&self) -> bool {
        !matches!(
            self,
            GematriaMethod::MisparMusafi
                | GematriaMethod::MisparKolel
                | GematriaMethod::MisparShemiMilui
                | GematriaMethod::MisparNeelam
                | GematriaMethod::MisparBoneeh
                | GematriaMethod::MisparHamerubahHaklali
                | GematriaMethod::MisparHaachor
                | GematriaMethod::MisparKatanMispari
        )
    }

    pub fn simple() -> impl Iterator<Item = GematriaMethod> {
        Self::ALL.into_iter().filter(GematriaMethod::is_simple)
    }
}

impl fmt::Display for GematriaMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GematriaMethod {
    type Err = HebrewError;

    /// Accepts the identifier case-insensitively; `-` works in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| HebrewError::UnknownMethod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifteen_simple_and_eight_composite() {
        assert_eq!(GematriaMethod::simple().count(), 15);
        assert_eq!(GematriaMethod::ALL.iter().filter(|m| !m.is_simple()).count(), 8);
    }

    #[test]
    fn identifiers_parse_back() {
        for method in GematriaMethod::ALL {
            assert_eq!(method.as_str().parse::<GematriaMethod>().unwrap(), method);
        }
        assert_eq!(
            "Mispar-Gadol".parse::<GematriaMethod>().unwrap(),
            GematriaMethod::MisparGadol
        );
        assert!(matches!(
            "mispar_nothing".parse::<GematriaMethod>(),
            Err(HebrewError::UnknownMethod(_))
        ));
    }

    #[test]
    fn serde_uses_the_identifier() {
        let json = serde_json::to_string(&GematriaMethod::MisparHamerubahHaklali).unwrap();
        assert_eq!(json, "\"mispar_hamerubah_haklali\"");
        let back: GematriaMethod = serde_json::from_str("\"ayak_bachar\"").unwrap();
        assert_eq!(back, GematriaMethod::AyakBachar);
    }
}

// ─────────────────────────────────────────────────────────────────────
// SCPN EPR Core — Isotope Catalogue
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Element → isotope catalogue, hydrogen through uranium.
//!
//! Lists the naturally occurring isotopes of each element in
//! mass-ascending order. Radioactive trace isotopes with an entry in
//! the spin property table (22Na, 99Tc, ...) are listed so that an
//! element's enumeration is complete.

/// Element symbols with a catalogue entry, in table order (H ... U).
pub fn catalogued_elements() -> &'static [&'static str] {
    ELEMENTS
}

/// Isotope identifiers for an element symbol.
///
/// Recognized symbols return an owned copy of the stored isotope list;
/// the canonical table can never be reached, let alone mutated, through
/// the return value. An unrecognized symbol degrades to a singleton
/// list holding the input itself, so unknown tokens round-trip instead
/// of failing. Enumeration callers rely on that fallback; it is not an
/// error path.
pub fn isotopes_for_element(element: &str) -> Vec<String> {
    match stable_isotopes(element) {
        Some(list) => list.iter().map(|s| s.to_string()).collect(),
        None => vec![element.to_string()],
    }
}

fn stable_isotopes(element: &str) -> Option<&'static [&'static str]> {
    let list: &'static [&'static str] = match element {
        "H" => &["1H", "2H"],
        "He" => &["3He"],
        "Li" => &["6Li", "7Li"],
        "Be" => &["9Be"],
        "B" => &["10B", "11B"],
        "C" => &["12C", "13C"],
        "N" => &["14N", "15N"],
        "O" => &["16O", "17O", "18O"],
        "F" => &["19F"],
        "Ne" => &["20Ne", "21Ne", "22Ne"],
        "Na" => &["22Na", "23Na"],
        "Mg" => &["24Mg", "25Mg", "26Mg"],
        "Al" => &["27Al"],
        "Si" => &["29Si", "30Si"],
        "P" => &["31P"],
        "S" => &["32S", "33S", "34S", "36S"],
        "Cl" => &["35Cl", "37Cl"],
        "Ar" => &["36Ar", "38Ar", "40Ar"],
        "K" => &["39K", "40K", "41K"],
        "Ca" => &["42Ca", "43Ca", "44Ca", "46Ca", "48Ca"],
        "Sc" => &["45Sc"],
        "Ti" => &["46Ti", "47Ti", "48Ti", "49Ti", "50Ti"],
        "V" => &["50V", "51V"],
        "Cr" => &["50Cr", "52Cr", "53Cr", "54Cr"],
        "Mn" => &["55Mn"],
        "Fe" => &["54Fe", "56Fe", "57Fe", "58Fe"],
        "Co" => &["59Co"],
        "Ni" => &["58Ni", "60Ni", "61Ni", "62Ni", "64Ni"],
        "Cu" => &["63Cu", "65Cu"],
        "Zn" => &["64Zn", "66Zn", "67Zn", "68Zn", "70Zn"],
        "Ga" => &["69Ga", "71Ga"],
        "Ge" => &["70Ge", "72Ge", "73Ge", "74Ge", "76Ge"],
        "As" => &["75As"],
        "Se" => &["74Se", "76Se", "77Se", "78Se", "80Se", "82Se"],
        "Br" => &["79Br", "81Br"],
        "Kr" => &["78Kr", "80Kr", "82Kr", "83Kr", "84Kr", "86Kr"],
        "Rb" => &["85Rb", "87Rb"],
        "Sr" => &["84Sr", "86Sr", "87Sr", "88Sr"],
        "Y" => &["89Y"],
        "Zr" => &["90Zr", "91Zr", "92Zr", "94Zr", "96Zr"],
        "Nb" => &["93Nb"],
        "Mo" => &["92Mo", "94Mo", "95Mo", "96Mo", "97Mo", "98Mo", "100Mo"],
        "Tc" => &["99Tc"],
        "Ru" => &["96Ru", "98Ru", "99Ru", "100Ru", "101Ru", "102Ru", "104Ru"],
        "Rh" => &["103Rh"],
        "Pd" => &["102Pd", "104Pd", "105Pd", "106Pd", "108Pd", "110Pd"],
        "Ag" => &["107Ag", "109Ag"],
        "Cd" => &["106Cd", "108Cd", "110Cd", "111Cd", "112Cd", "113Cd", "114Cd", "116Cd"],
        "In" => &["113In", "115In"],
        "Sn" => &[
            "112Sn",
            "114Sn",
            "115Sn",
            "116Sn",
            "117Sn",
            "118Sn",
            "119Sn",
            "120Sn",
            "122Sn",
            "124Sn",
        ],
        "Sb" => &["121Sb", "123Sb"],
        "Te" => &["120Te", "122Te", "123Te", "124Te", "125Te", "126Te", "128Te", "130Te"],
        "I" => &["127I"],
        "Xe" => &[
            "124Xe",
            "126Xe",
            "128Xe",
            "129Xe",
            "130Xe",
            "131Xe",
            "132Xe",
            "134Xe",
            "136Xe",
        ],
        "Cs" => &["133Cs"],
        "Ba" => &["130Ba", "132Ba", "134Ba", "135Ba", "136Ba", "137Ba", "138Ba"],
        "La" => &["138La", "139La"],
        "Ce" => &["136Ce", "138Ce", "140Ce", "142Ce"],
        "Pr" => &["141Pr"],
        "Nd" => &["142Nd", "143Nd", "144Nd", "145Nd", "146Nd", "148Nd", "150Nd"],
        "Pm" => &["147Pm"],
        "Sm" => &["144Sm", "147Sm", "148Sm", "149Sm", "150Sm", "152Sm", "154Sm"],
        "Eu" => &["151Eu", "153Eu"],
        "Gd" => &["152Gd", "154Gd", "155Gd", "156Gd", "157Gd", "158Gd", "160Gd"],
        "Tb" => &["159Tb"],
        "Dy" => &["156Dy", "158Dy", "160Dy", "161Dy", "162Dy", "163Dy", "164Dy"],
        "Ho" => &["165Ho"],
        "Er" => &["162Er", "164Er", "166Er", "167Er", "168Er", "170Er"],
        "Tm" => &["169Tm"],
        "Yb" => &["168Yb", "170Yb", "171Yb", "172Yb", "173Yb", "174Yb", "176Yb"],
        "Lu" => &["175Lu", "176Lu"],
        "Hf" => &["174Hf", "176Hf", "177Hf", "178Hf", "179Hf", "180Hf"],
        "Ta" => &["180Ta", "181Ta"],
        "W" => &["180W", "182W", "183W", "184W", "186W"],
        "Re" => &["185Re", "187Re"],
        "Os" => &["184Os", "186Os", "187Os", "188Os", "189Os", "190Os", "192Os"],
        "Ir" => &["191Ir", "193Ir"],
        "Pt" => &["190Pt", "192Pt", "194Pt", "195Pt", "196Pt", "198Pt"],
        "Au" => &["197Au"],
        "Hg" => &["196Hg", "198Hg", "199Hg", "200Hg", "201Hg", "202Hg", "204Hg"],
        "Tl" => &["203Tl", "205Tl"],
        "Pb" => &["204Pb", "206Pb", "207Pb", "208Pb"],
        "Bi" => &["209Bi"],
        "Th" => &["232Th"],
        "U" => &["235U", "238U"],
        _ => return None,
    };
    Some(list)
}

const ELEMENTS: &[&str] = &[
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si",
    "P", "S", "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni",
    "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb",
    "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", "Sb", "Te", "I", "Xe",
    "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho",
    "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Th", "U"
];

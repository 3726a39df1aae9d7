//! TLD resolution
//!
//! Expands the selected TLD categories into the concrete set of suffixes to
//! pair with each generated label. Country codes that only permit
//! third-level registration are substituted by their permitted compound
//! suffixes instead of the bare code.

use std::collections::HashSet;

/// Original TLDs; excludes the restricted-use .edu, .gov, .mil and .int.
pub const TLDS_ORIGINAL: &[&str] = &[".com", ".net", ".org"];

/// Country code TLDs.
pub const TLDS_COUNTRY_CODE: &[&str] = &[
    ".ac", ".ad", ".ae", ".af", ".ag", ".ai", ".al", ".am", ".ao", ".aq", ".ar", ".as", ".at",
    ".au", ".aw", ".ax", ".az", ".ba", ".bb", ".bd", ".be", ".bf", ".bg", ".bh", ".bi", ".bj",
    ".bm", ".bn", ".bo", ".bq", ".br", ".bs", ".bt", ".bw", ".by", ".bz", ".ca", ".cc", ".cd",
    ".cf", ".cg", ".ch", ".ci", ".ck", ".cl", ".cm", ".cn", ".co", ".cr", ".cu", ".cv", ".cw",
    ".cx", ".cy", ".cz", ".de", ".dj", ".dk", ".dm", ".do", ".dz", ".ec", ".ee", ".eg", ".eh",
    ".er", ".es", ".et", ".eu", ".fi", ".fj", ".fk", ".fm", ".fo", ".fr", ".ga", ".gd", ".ge",
    ".gf", ".gg", ".gh", ".gi", ".gl", ".gm", ".gn", ".gp", ".gq", ".gr", ".gs", ".gt", ".gu",
    ".gw", ".gy", ".hk", ".hm", ".hn", ".hr", ".ht", ".hu", ".id", ".ie", ".il", ".im", ".in",
    ".io", ".iq", ".ir", ".is", ".it", ".je", ".jm", ".jo", ".jp", ".ke", ".kg", ".kh", ".ki",
    ".km", ".kn", ".kp", ".kr", ".kw", ".ky", ".kz", ".la", ".lb", ".lc", ".li", ".lk", ".lr",
    ".ls", ".lt", ".lu", ".lv", ".ly", ".ma", ".mc", ".md", ".me", ".mg", ".mh", ".mk", ".ml",
    ".mm", ".mn", ".mo", ".mp", ".mq", ".mr", ".ms", ".mt", ".mu", ".mv", ".mw", ".mx", ".my",
    ".mz", ".na", ".nc", ".ne", ".nf", ".ng", ".ni", ".nl", ".no", ".np", ".nr", ".nu", ".nz",
    ".om", ".pa", ".pe", ".pf", ".pg", ".ph", ".pk", ".pl", ".pm", ".pn", ".pr", ".ps", ".pt",
    ".pw", ".py", ".qa", ".re", ".ro", ".rs", ".ru", ".rw", ".sa", ".sb", ".sc", ".sd", ".se",
    ".sg", ".sh", ".si", ".sk", ".sl", ".sm", ".sn", ".so", ".sr", ".ss", ".st", ".su", ".sv",
    ".sx", ".sy", ".sz", ".tc", ".td", ".tf", ".tg", ".th", ".tj", ".tk", ".tl", ".tm", ".tn",
    ".to", ".tr", ".tt", ".tv", ".tw", ".tz", ".ua", ".ug", ".uk", ".us", ".uy", ".uz", ".va",
    ".vc", ".ve", ".vg", ".vi", ".vn", ".vu", ".wf", ".ws", ".ye", ".yt", ".za", ".zm",
];

/// Country codes with restricted second-level registration; individuals and
/// companies can only register third-level names under these.
pub const TLDS_RESTRICTED_LVL2: &[&str] = &[
    ".au", ".bn", ".bt", ".cy", ".et", ".fk", ".gh", ".gn", ".gu", ".jm", ".ke", ".kh", ".kp",
    ".kw", ".lb", ".lr", ".ls", ".mm", ".mq", ".mt", ".mz", ".ni", ".np", ".pa", ".pg", ".py",
    ".qa", ".sb", ".sv", ".sz", ".th", ".tz", ".ve", ".ye",
];

/// Permitted second-level categories under the restricted country codes,
/// usable for third-level registration.
pub const TLDS_UNRESTRICTED_LVL2: &[&str] = &[
    ".com.au", ".net.au", ".org.au", ".asn.au", ".id.au", ".com.bn", ".edu.bn", ".net.bn",
    ".org.bn", ".bt", ".com.bt", ".edu.bt", ".net.bt", ".org.bt", ".ac.cy", ".net.cy", ".org.cy",
    ".pro.cy", ".name.cy", ".ekloges.cy", ".tm.cy", ".ltd.cy", ".biz.cy", ".press.cy",
    ".parliament.cy", ".com.cy", ".centralbank.cy", ".com.et", ".org.et", ".edu.et", ".net.et",
    ".name.et", ".co.fk", ".org.fk", ".ac.fk", ".nom.fk", ".net.fk", ".com.gh", ".edu.gh",
    ".com.gn", ".ac.gn", ".org.gn", ".net.gn", ".com.gu", ".net.gu", ".org.gu", ".edu.gu",
    ".com.jm", ".net.jm", ".org.jm", ".edu.jm", ".co.ke", ".or.ke", ".ne.ke", ".go.ke", ".ac.ke",
    ".sc.ke", ".me.ke", ".mobi.ke", ".info.ke", ".per.kh", ".com.kh", ".edu.kh", ".net.kh",
    ".org.kh", ".aca.kp", ".com.kp", ".edu.kp", ".law.kp", ".org.kp", ".rep.kp", ".net.kp",
    ".sca.kp", ".com.kw", ".ind.kw", ".net.kw", ".org.kw", ".emb.kw", ".edu.kw", ".com.lb",
    ".edu.lb", ".net.lb", ".org.lb", ".com.lr", ".edu.lr", ".org.lr", ".net.lr", ".ac.ls",
    ".co.ls", ".net.ls", ".nul.ls", ".org.ls", ".sc.ls", ".net.mm", ".com.mm", ".edu.mm",
    ".org.mm", ".edu.mt", ".com.mt", ".net.mt", ".org.mt", ".co.mz", ".net.mz", ".org.mz",
    ".ac.mz", ".edu.mz", ".gob.ni", ".co.ni", ".com.ni", ".ac.ni", ".edu.ni", ".org.ni",
    ".nom.ni", ".net.ni", ".edu.np", ".com.np", ".org.np", ".net.np", ".aero.np", ".asia.np",
    ".biz.np", ".coop.np", ".info.np", ".jobs.np", ".mobi.np", ".museum.np", ".name.np",
    ".pro.np", ".services.np", ".travel.np", ".net.pa", ".com.pa", ".ac.pa", ".sld.pa",
    ".edu.pa", ".org.pa", ".abo.pa", ".ing.pa", ".med.pa", ".nom.pa", ".com.pg", ".net.pg",
    ".ac.pg", ".org.pg", ".com.py", ".coop.py", ".edu.py", ".org.py", ".net.py", ".una.py",
    ".com.qa", ".edu.qa", ".sch.qa", ".net.qa", ".org.qa", ".com.sb", ".net.sb", ".edu.sv",
    ".com.sv", ".org.sv", ".red.sv", ".co.sz", ".ac.sz", ".org.sz", ".ac.th", ".co.th", ".or.th",
    ".net.th", ".in.th", ".co.tz", ".ac.tz", ".or.tz", ".ne.tz", ".hotel.tz", ".mobi.tz",
    ".tv.tz", ".info.tz", ".me.tz", ".arts.ve", ".co.ve", ".com.ve", ".info.ve", ".net.ve",
    ".org.ve", ".radio.ve", ".web.ve", ".com.ye", ".co.ye", ".ltd.ye", ".me.ye", ".net.ye",
    ".org.ye", ".plc.ye",
];

/// Which TLD categories to expand, beyond the input domain's own TLD.
#[derive(Debug, Clone, Default)]
pub struct TldSelection {
    /// Include `.com`, `.net`, `.org`
    pub original_set: bool,
    /// Include the country code TLDs
    pub country_codes: bool,
    /// Comma-separated extra TLDs, with or without leading dots
    pub custom: Option<String>,
}

/// Resolve the selected categories into the deduplicated, first-seen-order
/// set of TLD suffixes to test. The input domain's own TLD always comes
/// first.
pub fn resolve_tlds(original_tld: &str, selection: &TldSelection) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tlds = Vec::new();
    fn push(tld: String, seen: &mut HashSet<String>, tlds: &mut Vec<String>) {
        if seen.insert(tld.clone()) {
            tlds.push(tld);
        }
    }

    push(original_tld.to_string(), &mut seen, &mut tlds);

    if selection.original_set {
        for tld in TLDS_ORIGINAL {
            push(tld.to_string(), &mut seen, &mut tlds);
        }
    }

    if selection.country_codes {
        for cc in TLDS_COUNTRY_CODE {
            if TLDS_RESTRICTED_LVL2.contains(cc) {
                // Bare registration is not permitted here; substitute the
                // compound suffixes open for third-level registration.
                for substitute in TLDS_UNRESTRICTED_LVL2 {
                    if substitute.ends_with(cc) {
                        push(substitute.to_string(), &mut seen, &mut tlds);
                    }
                }
            } else {
                push(cc.to_string(), &mut seen, &mut tlds);
            }
        }
    }

    if let Some(custom) = &selection.custom {
        for entry in custom.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let normalized = if entry.starts_with('.') {
                entry.to_string()
            } else {
                format!(".{}", entry)
            };
            push(normalized, &mut seen, &mut tlds);
        }
    }

    tlds
}

//! Static copy for the landing page.

pub struct ProcessStep {
    pub id: &'static str,
    pub number: u8,
    pub title: &'static str,
    pub text: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 3] = [
    ProcessStep {
        id: "process-1",
        number: 1,
        title: "Captação Estratégica",
        text: "Água captada em alto-mar, a mais de 20 km da costa e profundidade superior a 30 metros, garantindo pureza excepcional.",
    },
    ProcessStep {
        id: "process-2",
        number: 2,
        title: "Purificação Nanotecnológica",
        text: "Todos os sais e impurezas são meticulosamente removidos, preservando exclusivamente os minerais e nutrientes essenciais.",
    },
    ProcessStep {
        id: "process-3",
        number: 3,
        title: "Qualidade Internacional",
        text: "Água com qualidade premium de consumo, rigorosamente dentro dos padrões internacionais exigidos pela OMS.",
    },
];

pub struct LabelValue {
    pub label: &'static str,
    pub value: &'static str,
}

pub const NUTRITION: [LabelValue; 7] = [
    LabelValue { label: "Bicarbonato de Sódio:", value: "37 mg/L" },
    LabelValue { label: "Sódio:", value: "28 mg/L" },
    LabelValue { label: "Cloretos:", value: "0,74 mg/L" },
    LabelValue { label: "Sulfatos:", value: "0,12 mg/L" },
    LabelValue { label: "pH:", value: "7,9" },
    LabelValue { label: "Dureza Total:", value: "0,56 mg/L" },
    LabelValue { label: "Sólidos Totais:", value: "105 mg/L" },
];

pub const MICROBIOLOGY: [LabelValue; 2] = [
    LabelValue { label: "Coliformes Totais (em 100ml):", value: "Ausente" },
    LabelValue { label: "Escherichia coli (em 100ml):", value: "Ausente" },
];

pub const MINERALS: [&str; 63] = [
    "Cálcio", "Magnésio", "Potássio", "Sódio", "Sulfato", "Silício", "Alumínio", "Fósforo",
    "Cobre", "Zinco", "Manganês", "Ferro", "Vanádio", "Molibdênio", "Chumbo", "Antimônio",
    "Lutécio", "Neodímio", "Praseodímio", "Samário", "Escândio", "Térbio", "Tório", "Túlio",
    "Ítrio", "Itérbio", "Boro", "Germânio", "Rênio", "Tantálio", "Tungstênio", "Zircônio",
    "Berílio", "Tálio", "Titânio", "Cromo", "Níquel", "Cobalto", "Arsênio", "Selênio",
    "Carbono", "Cério", "Disprósio", "Érbio", "Európio", "Gadolínio", "Hólmio", "Lantânio",
    "Ouro", "Irídio", "Paládio", "Platina", "Ródio", "Rutênio", "Estanho", "Telúrio",
    "Háfnio", "Índio", "Urânio", "Nióbio", "Estrôncio", "Bário", "Cádmio",
];

pub const CERTIFICATIONS: [&str; 7] = [
    "Produzida e envasada rigorosamente dentro dos mais altos padrões de qualidade determinados pelos organismos industriais e ambientais internacionais.",
    "Em total conformidade com os critérios de potabilidade exigidos por todas as legislações de controle de água no mundo.",
    "AWWA - APHA - WPCI — Standard Methods for the Examination of Water and Wastewater: Certificação internacional de excelência.",
    "Lei 9.433/1997 — Captação da água em total conformidade com a legislação ambiental brasileira.",
    "Portaria n. 518 do Ministério da Saúde — Controle e Vigilância da Qualidade de Água para o Consumo Humano e Padrão de Potabilidade.",
    "FDA — Food and Drug Administration: Certificação internacional do rigoroso órgão norte-americano, reconhecida em 81 países.",
    "ANVISA — Água Adicionada de Sais: Em total conformidade com a RDC 274 de 22/09/2005.",
];

const STANDARD_MARKERS: [&str; 5] = ["AWWA", "Lei", "Portaria", "FDA", "ANVISA"];
const LEAD_SEPARATOR: &str = " — ";

/// How a certification row is emphasised: rows that cite a standard get
/// the citation in bold, the rest is plain text.
#[derive(Debug, PartialEq, Eq)]
pub enum CertificationLine<'a> {
    Plain(&'a str),
    Cited { lead: &'a str, rest: Option<&'a str> },
}

pub fn certification_line(text: &str) -> CertificationLine<'_> {
    if !STANDARD_MARKERS.iter().any(|marker| text.contains(marker)) {
        return CertificationLine::Plain(text);
    }
    match text.split_once(LEAD_SEPARATOR) {
        Some((lead, rest)) => CertificationLine::Cited { lead, rest: Some(rest) },
        None => CertificationLine::Cited { lead: text, rest: None },
    }
}

pub struct Product {
    pub id: &'static str,
    pub image: &'static str,
    pub title: &'static str,
    pub pack: &'static str,
    pub size: &'static str,
    pub weight: &'static str,
}

pub const PRODUCTS: [Product; 4] = [
    Product {
        id: "product-1",
        image: "/water-bottle-1-5-liter-premium.jpg",
        title: "Pet 1,5 Litros",
        pack: "Pack com 6 unidades",
        size: "17,5 × 26,7 × 33,1 cm",
        weight: "9,66 kg",
    },
    Product {
        id: "product-2",
        image: "/water-bottle-500ml-premium.jpg",
        title: "Pet 500 ml",
        pack: "Pack com 12 unidades",
        size: "20,2 × 27,1 × 22,6 cm",
        weight: "6,6 kg",
    },
    Product {
        id: "product-3",
        image: "/water-cup-310ml-premium.jpg",
        title: "Copo 310 ml",
        pack: "Caixa com 24 unidades",
        size: "46,7 × 32,0 × 14,2 cm",
        weight: "7,8 kg",
    },
    Product {
        id: "product-4",
        image: "/water-cup-200ml-premium.jpg",
        title: "Copo 200 ml",
        pack: "Caixa com 24 unidades",
        size: "46,2 × 31,2 × 10,0 cm",
        weight: "5,5 kg",
    },
];

pub const FOOTER_CERTIFICATIONS: [&str; 3] = [
    "FDA — Food and Drug Administration",
    "ANVISA — Agência Nacional de Vigilância Sanitária",
    "OMS — Organização Mundial da Saúde",
];

pub const COMPANY_NAME: &str = "One Beneficiadora e Distribuidora de Água Ltda.";
pub const CONTACT_PHONE: &str = "+55 (11) 3873-2968";

/// Stagger applied to the n-th element of a revealed group.
pub fn stagger_ms(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sixty_three_distinct_minerals() {
        let unique: HashSet<_> = MINERALS.iter().collect();
        assert_eq!(unique.len(), 63);
    }

    #[test]
    fn plain_certification_rows() {
        assert_eq!(certification_line(CERTIFICATIONS[0]), CertificationLine::Plain(CERTIFICATIONS[0]));
        assert_eq!(certification_line(CERTIFICATIONS[1]), CertificationLine::Plain(CERTIFICATIONS[1]));
    }

    #[test]
    fn cited_rows_split_on_first_separator() {
        assert_eq!(
            certification_line(CERTIFICATIONS[5]),
            CertificationLine::Cited {
                lead: "FDA",
                rest: Some("Food and Drug Administration: Certificação internacional do rigoroso órgão norte-americano, reconhecida em 81 países."),
            }
        );
        assert_eq!(
            certification_line("Lei sem separador"),
            CertificationLine::Cited { lead: "Lei sem separador", rest: None }
        );
        assert_eq!(
            certification_line("ANVISA — a — b"),
            CertificationLine::Cited { lead: "ANVISA", rest: Some("a — b") }
        );
    }

    #[test]
    fn reveal_ids_are_unique() {
        let ids: Vec<&str> = PROCESS_STEPS
            .iter()
            .map(|step| step.id)
            .chain(PRODUCTS.iter().map(|product| product.id))
            .collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger_ms(0, 200), 0);
        assert_eq!(stagger_ms(2, 200), 400);
        assert_eq!(stagger_ms(3, 150), 450);
    }
}

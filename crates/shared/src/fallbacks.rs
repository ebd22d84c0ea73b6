//! Built-in content used when no content source is configured or a fetch
//! comes back empty or fails.

use crate::models::{BlogPost, CityAverages, DistrictInfo, NavLink, SiteConfig, CITY_TOTAL_NAME};

#[allow(clippy::too_many_arguments)]
fn district(
    id: &str,
    name: &str,
    price_change: f64,
    avg_days_on_market: f64,
    price_per_sqm: f64,
    median_price: f64,
    description: &str,
    lat: f64,
    lng: f64,
) -> DistrictInfo {
    DistrictInfo {
        id: id.to_string(),
        name: name.to_string(),
        price_change,
        avg_days_on_market,
        price_per_sqm,
        median_price,
        description: description.to_string(),
        lat,
        lng,
    }
}

pub fn districts() -> Vec<DistrictInfo> {
    vec![
        district(
            "oslo",
            CITY_TOTAL_NAME,
            2.4,
            19.0,
            94_500.0,
            5_850_000.0,
            "Boligmarkedet i Oslo viser stabil vekst over hele linjen, med fortsatt høy etterspørsel i sentrale strøk.",
            59.9139,
            10.7522,
        ),
        district(
            "gamle-oslo",
            "Gamle Oslo",
            2.6,
            17.0,
            102_000.0,
            5_200_000.0,
            "Bydelen preges av massiv utvikling og stor tiltrekningskraft for unge voksne.",
            59.9077,
            10.7788,
        ),
        district(
            "grunerlokka",
            "Grünerløkka",
            1.8,
            14.0,
            105_000.0,
            4_950_000.0,
            "Høy omløpshastighet preger det urbane markedet her. Populært for førstegangskjøpere.",
            59.9242,
            10.7584,
        ),
        district(
            "sagene",
            "Sagene",
            2.1,
            16.0,
            98_000.0,
            4_800_000.0,
            "Stabilt marked med sjarmerende bebyggelse langs Akerselva.",
            59.9378,
            10.7584,
        ),
        district(
            "st-hanshaugen",
            "St. Hanshaugen",
            2.9,
            18.0,
            112_000.0,
            6_100_000.0,
            "Sentral beliggenhet med mange klassiske bygårder og parker.",
            59.9268,
            10.7401,
        ),
        district(
            "sentrum",
            "Sentrum",
            3.5,
            15.0,
            135_000.0,
            5_500_000.0,
            "Oslos sentrale kjerneområde med høy etterspørsel og kompakte leiligheter.",
            59.9127,
            10.7461,
        ),
        district(
            "frogner",
            "Frogner",
            3.2,
            22.0,
            145_000.0,
            8_900_000.0,
            "Landets mest eksklusive bydel med stabilt høye kvadratmeterpriser.",
            59.9171,
            10.7061,
        ),
        district(
            "ullern",
            "Ullern",
            2.5,
            25.0,
            125_000.0,
            9_500_000.0,
            "Attraktiv bydel i vest med mange eneboliger og nyere leilighetsprosjekter.",
            59.9248,
            10.6521,
        ),
        district(
            "vestre-aker",
            "Vestre Aker",
            2.2,
            28.0,
            118_000.0,
            11_200_000.0,
            "Preget av villabebyggelse og nærhet til Marka. Stabilt marked.",
            59.9547,
            10.6725,
        ),
        district(
            "nordre-aker",
            "Nordre Aker",
            2.8,
            20.0,
            108_000.0,
            8_200_000.0,
            "Svært populært område for barnefamilier med gode skoler og grøntarealer.",
            59.9622,
            10.7538,
        ),
        district(
            "bjerke",
            "Bjerke",
            1.9,
            22.0,
            82_000.0,
            4_600_000.0,
            "Voksende bydel med mye nybygging og god kommunikasjon.",
            59.9404,
            10.8172,
        ),
        district(
            "grorud",
            "Grorud",
            1.5,
            26.0,
            68_000.0,
            3_800_000.0,
            "Rimeligere inngangsbillett til markedet med gode turmuligheter.",
            59.9589,
            10.8845,
        ),
        district(
            "stovner",
            "Stovner",
            1.4,
            30.0,
            62_000.0,
            3_650_000.0,
            "Mye for pengene og barnevennlige omgivelser i Groruddalen.",
            59.9733,
            10.9239,
        ),
        district(
            "alna",
            "Alna",
            1.6,
            24.0,
            72_000.0,
            4_100_000.0,
            "Bydel med variert boligmasse og gode handelsfasiliteter.",
            59.9324,
            10.8524,
        ),
        district(
            "ostensjo",
            "Østensjø",
            2.3,
            19.0,
            88_000.0,
            5_300_000.0,
            "Etablert bydel med sterkt lokalmiljø og nærhet til Østensjøvannet.",
            59.8894,
            10.8306,
        ),
        district(
            "nordstrand",
            "Nordstrand",
            3.0,
            21.0,
            104_000.0,
            8_500_000.0,
            "Attraktiv bydel med flott utsikt og nærhet til fjorden.",
            59.8624,
            10.7958,
        ),
        district(
            "sondre-nordstrand",
            "Søndre Nordstrand",
            1.7,
            29.0,
            58_000.0,
            3_400_000.0,
            "Oslos sørligste bydel med mange rekkehus og grønne lunger.",
            59.8335,
            10.8256,
        ),
    ]
}

pub fn city_averages() -> CityAverages {
    CityAverages {
        price_trend: 2.4,
        days_on_market: 19.0,
        median_price: 5.8,
        avg_sqm_price: 94_500.0,
    }
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "fallback-1".to_string(),
            title: "Boligpriser Oslo 2026\u{2013}2028: Analyse av ferske prognoser".to_string(),
            slug: "boligpriser-oslo-2026-2028".to_string(),
            category: "MARKEDSINNSIKT".to_string(),
            published_at: "2026-01-12T00:00:00Z".to_string(),
            featured: true,
            image_url: None,
        },
        BlogPost {
            id: "fallback-2".to_string(),
            title: "Hvordan vil utviklingen i styringsrenta påvirke boligprisene fremover?"
                .to_string(),
            slug: "styringsrenta-boligpriser".to_string(),
            category: "MARKEDSINNSIKT".to_string(),
            published_at: "2026-01-05T00:00:00Z".to_string(),
            featured: false,
            image_url: None,
        },
    ]
}

fn nav_link(name: &str, active: bool, has_dropdown: bool) -> NavLink {
    NavLink {
        name: name.to_string(),
        href: "#".to_string(),
        active,
        has_dropdown,
    }
}

pub fn site_config() -> SiteConfig {
    SiteConfig {
        nav_links: vec![
            nav_link("Forsiden", true, false),
            nav_link("Kart", false, false),
            nav_link("Markedsrapporter", false, true),
            nav_link("Innsikt", false, false),
            nav_link("Blogg", false, true),
        ],
        cta_text: "Få verdivurdering".to_string(),
        cta_url: None,
        newsletter_title: Some(
            "Motta min månedlige oppdatering på boligmarkedet i Oslo.".to_string(),
        ),
        newsletter_subtitle: Some("\"Faglig og ærlig om fortid, nåtid og fremtid.\"".to_string()),
    }
}

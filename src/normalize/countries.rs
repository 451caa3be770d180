//! Embedded ISO 3166-1 country table.

#[derive(Debug, Clone, Copy)]
pub struct Country {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name: &'static str,
    /// Official and common names that also identify the country
    pub aliases: &'static [&'static str],
}

const fn c(
    alpha2: &'static str,
    alpha3: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
) -> Country {
    Country {
        alpha2,
        alpha3,
        name,
        aliases,
    }
}

/// Look a country up by alpha-2, alpha-3, short name or alias, ignoring case
pub fn lookup(query: &str) -> Option<&'static Country> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    COUNTRIES.iter().find(|country| {
        country.alpha2.eq_ignore_ascii_case(query)
            || country.alpha3.eq_ignore_ascii_case(query)
            || equals_folded(country.name, query)
            || country.aliases.iter().any(|alias| equals_folded(alias, query))
    })
}

fn equals_folded(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

pub static COUNTRIES: &[Country] = &[
    c("AW", "ABW", "Aruba", &[]),
    c("AF", "AFG", "Afghanistan", &["Islamic Republic of Afghanistan"]),
    c("AO", "AGO", "Angola", &["Republic of Angola"]),
    c("AI", "AIA", "Anguilla", &[]),
    c("AX", "ALA", "Åland Islands", &[]),
    c("AL", "ALB", "Albania", &["Republic of Albania"]),
    c("AD", "AND", "Andorra", &["Principality of Andorra"]),
    c("AE", "ARE", "United Arab Emirates", &[]),
    c("AR", "ARG", "Argentina", &["Argentine Republic"]),
    c("AM", "ARM", "Armenia", &["Republic of Armenia"]),
    c("AS", "ASM", "American Samoa", &[]),
    c("AQ", "ATA", "Antarctica", &[]),
    c("TF", "ATF", "French Southern Territories", &[]),
    c("AG", "ATG", "Antigua and Barbuda", &[]),
    c("AU", "AUS", "Australia", &[]),
    c("AT", "AUT", "Austria", &["Republic of Austria"]),
    c("AZ", "AZE", "Azerbaijan", &["Republic of Azerbaijan"]),
    c("BI", "BDI", "Burundi", &["Republic of Burundi"]),
    c("BE", "BEL", "Belgium", &["Kingdom of Belgium"]),
    c("BJ", "BEN", "Benin", &["Republic of Benin"]),
    c("BQ", "BES", "Bonaire, Sint Eustatius and Saba", &[]),
    c("BF", "BFA", "Burkina Faso", &[]),
    c("BD", "BGD", "Bangladesh", &["People's Republic of Bangladesh"]),
    c("BG", "BGR", "Bulgaria", &["Republic of Bulgaria"]),
    c("BH", "BHR", "Bahrain", &["Kingdom of Bahrain"]),
    c("BS", "BHS", "Bahamas", &["Commonwealth of the Bahamas"]),
    c("BA", "BIH", "Bosnia and Herzegovina", &["Republic of Bosnia and Herzegovina"]),
    c("BL", "BLM", "Saint Barthélemy", &[]),
    c("BY", "BLR", "Belarus", &["Republic of Belarus"]),
    c("BZ", "BLZ", "Belize", &[]),
    c("BM", "BMU", "Bermuda", &[]),
    c("BO", "BOL", "Bolivia, Plurinational State of", &["Bolivia", "Plurinational State of Bolivia"]),
    c("BR", "BRA", "Brazil", &["Federative Republic of Brazil"]),
    c("BB", "BRB", "Barbados", &[]),
    c("BN", "BRN", "Brunei Darussalam", &[]),
    c("BT", "BTN", "Bhutan", &["Kingdom of Bhutan"]),
    c("BV", "BVT", "Bouvet Island", &[]),
    c("BW", "BWA", "Botswana", &["Republic of Botswana"]),
    c("CF", "CAF", "Central African Republic", &[]),
    c("CA", "CAN", "Canada", &[]),
    c("CC", "CCK", "Cocos (Keeling) Islands", &[]),
    c("CH", "CHE", "Switzerland", &["Swiss Confederation"]),
    c("CL", "CHL", "Chile", &["Republic of Chile"]),
    c("CN", "CHN", "China", &["People's Republic of China"]),
    c("CI", "CIV", "Côte d'Ivoire", &["Republic of Côte d'Ivoire"]),
    c("CM", "CMR", "Cameroon", &["Republic of Cameroon"]),
    c("CD", "COD", "Congo, The Democratic Republic of the", &[]),
    c("CG", "COG", "Congo", &["Republic of the Congo"]),
    c("CK", "COK", "Cook Islands", &[]),
    c("CO", "COL", "Colombia", &["Republic of Colombia"]),
    c("KM", "COM", "Comoros", &["Union of the Comoros"]),
    c("CV", "CPV", "Cabo Verde", &["Republic of Cabo Verde"]),
    c("CR", "CRI", "Costa Rica", &["Republic of Costa Rica"]),
    c("CU", "CUB", "Cuba", &["Republic of Cuba"]),
    c("CW", "CUW", "Curaçao", &[]),
    c("CX", "CXR", "Christmas Island", &[]),
    c("KY", "CYM", "Cayman Islands", &[]),
    c("CY", "CYP", "Cyprus", &["Republic of Cyprus"]),
    c("CZ", "CZE", "Czechia", &["Czech Republic"]),
    c("DE", "DEU", "Germany", &["Federal Republic of Germany"]),
    c("DJ", "DJI", "Djibouti", &["Republic of Djibouti"]),
    c("DM", "DMA", "Dominica", &["Commonwealth of Dominica"]),
    c("DK", "DNK", "Denmark", &["Kingdom of Denmark"]),
    c("DO", "DOM", "Dominican Republic", &[]),
    c("DZ", "DZA", "Algeria", &["People's Democratic Republic of Algeria"]),
    c("EC", "ECU", "Ecuador", &["Republic of Ecuador"]),
    c("EG", "EGY", "Egypt", &["Arab Republic of Egypt"]),
    c("ER", "ERI", "Eritrea", &["the State of Eritrea"]),
    c("EH", "ESH", "Western Sahara", &[]),
    c("ES", "ESP", "Spain", &["Kingdom of Spain"]),
    c("EE", "EST", "Estonia", &["Republic of Estonia"]),
    c("ET", "ETH", "Ethiopia", &["Federal Democratic Republic of Ethiopia"]),
    c("FI", "FIN", "Finland", &["Republic of Finland"]),
    c("FJ", "FJI", "Fiji", &["Republic of Fiji"]),
    c("FK", "FLK", "Falkland Islands (Malvinas)", &[]),
    c("FR", "FRA", "France", &["French Republic"]),
    c("FO", "FRO", "Faroe Islands", &[]),
    c("FM", "FSM", "Micronesia, Federated States of", &["Federated States of Micronesia"]),
    c("GA", "GAB", "Gabon", &["Gabonese Republic"]),
    c("GB", "GBR", "United Kingdom", &["United Kingdom of Great Britain and Northern Ireland"]),
    c("GE", "GEO", "Georgia", &[]),
    c("GG", "GGY", "Guernsey", &[]),
    c("GH", "GHA", "Ghana", &["Republic of Ghana"]),
    c("GI", "GIB", "Gibraltar", &[]),
    c("GN", "GIN", "Guinea", &["Republic of Guinea"]),
    c("GP", "GLP", "Guadeloupe", &[]),
    c("GM", "GMB", "Gambia", &["Republic of the Gambia"]),
    c("GW", "GNB", "Guinea-Bissau", &["Republic of Guinea-Bissau"]),
    c("GQ", "GNQ", "Equatorial Guinea", &["Republic of Equatorial Guinea"]),
    c("GR", "GRC", "Greece", &["Hellenic Republic"]),
    c("GD", "GRD", "Grenada", &[]),
    c("GL", "GRL", "Greenland", &[]),
    c("GT", "GTM", "Guatemala", &["Republic of Guatemala"]),
    c("GF", "GUF", "French Guiana", &[]),
    c("GU", "GUM", "Guam", &[]),
    c("GY", "GUY", "Guyana", &["Republic of Guyana"]),
    c("HK", "HKG", "Hong Kong", &["Hong Kong Special Administrative Region of China"]),
    c("HM", "HMD", "Heard Island and McDonald Islands", &[]),
    c("HN", "HND", "Honduras", &["Republic of Honduras"]),
    c("HR", "HRV", "Croatia", &["Republic of Croatia"]),
    c("HT", "HTI", "Haiti", &["Republic of Haiti"]),
    c("HU", "HUN", "Hungary", &[]),
    c("ID", "IDN", "Indonesia", &["Republic of Indonesia"]),
    c("IM", "IMN", "Isle of Man", &[]),
    c("IN", "IND", "India", &["Republic of India"]),
    c("IO", "IOT", "British Indian Ocean Territory", &[]),
    c("IE", "IRL", "Ireland", &[]),
    c("IR", "IRN", "Iran, Islamic Republic of", &["Islamic Republic of Iran"]),
    c("IQ", "IRQ", "Iraq", &["Republic of Iraq"]),
    c("IS", "ISL", "Iceland", &["Republic of Iceland"]),
    c("IL", "ISR", "Israel", &["State of Israel"]),
    c("IT", "ITA", "Italy", &["Italian Republic"]),
    c("JM", "JAM", "Jamaica", &[]),
    c("JE", "JEY", "Jersey", &[]),
    c("JO", "JOR", "Jordan", &["Hashemite Kingdom of Jordan"]),
    c("JP", "JPN", "Japan", &[]),
    c("KZ", "KAZ", "Kazakhstan", &["Republic of Kazakhstan"]),
    c("KE", "KEN", "Kenya", &["Republic of Kenya"]),
    c("KG", "KGZ", "Kyrgyzstan", &["Kyrgyz Republic"]),
    c("KH", "KHM", "Cambodia", &["Kingdom of Cambodia"]),
    c("KI", "KIR", "Kiribati", &["Republic of Kiribati"]),
    c("KN", "KNA", "Saint Kitts and Nevis", &[]),
    c("KR", "KOR", "Korea, Republic of", &["Republic of Korea"]),
    c("KW", "KWT", "Kuwait", &["State of Kuwait"]),
    c("LA", "LAO", "Lao People's Democratic Republic", &["Laos"]),
    c("LB", "LBN", "Lebanon", &["Lebanese Republic"]),
    c("LR", "LBR", "Liberia", &["Republic of Liberia"]),
    c("LY", "LBY", "Libya", &["State of Libya"]),
    c("LC", "LCA", "Saint Lucia", &[]),
    c("LI", "LIE", "Liechtenstein", &["Principality of Liechtenstein"]),
    c("LK", "LKA", "Sri Lanka", &["Democratic Socialist Republic of Sri Lanka"]),
    c("LS", "LSO", "Lesotho", &["Kingdom of Lesotho"]),
    c("LT", "LTU", "Lithuania", &["Republic of Lithuania"]),
    c("LU", "LUX", "Luxembourg", &["Grand Duchy of Luxembourg"]),
    c("LV", "LVA", "Latvia", &["Republic of Latvia"]),
    c("MO", "MAC", "Macao", &["Macao Special Administrative Region of China", "Macau"]),
    c("MF", "MAF", "Saint Martin (French part)", &[]),
    c("MA", "MAR", "Morocco", &["Kingdom of Morocco"]),
    c("MC", "MCO", "Monaco", &["Principality of Monaco"]),
    c("MD", "MDA", "Moldova, Republic of", &["Republic of Moldova", "Moldova"]),
    c("MG", "MDG", "Madagascar", &["Republic of Madagascar"]),
    c("MV", "MDV", "Maldives", &["Republic of Maldives"]),
    c("MX", "MEX", "Mexico", &["United Mexican States"]),
    c("MH", "MHL", "Marshall Islands", &["Republic of the Marshall Islands"]),
    c("MK", "MKD", "North Macedonia", &["Republic of North Macedonia"]),
    c("ML", "MLI", "Mali", &["Republic of Mali"]),
    c("MT", "MLT", "Malta", &["Republic of Malta"]),
    c("MM", "MMR", "Myanmar", &["Republic of Myanmar"]),
    c("ME", "MNE", "Montenegro", &[]),
    c("MN", "MNG", "Mongolia", &[]),
    c("MP", "MNP", "Northern Mariana Islands", &["Commonwealth of the Northern Mariana Islands"]),
    c("MZ", "MOZ", "Mozambique", &["Republic of Mozambique"]),
    c("MR", "MRT", "Mauritania", &["Islamic Republic of Mauritania"]),
    c("MS", "MSR", "Montserrat", &[]),
    c("MQ", "MTQ", "Martinique", &[]),
    c("MU", "MUS", "Mauritius", &["Republic of Mauritius"]),
    c("MW", "MWI", "Malawi", &["Republic of Malawi"]),
    c("MY", "MYS", "Malaysia", &[]),
    c("YT", "MYT", "Mayotte", &[]),
    c("NA", "NAM", "Namibia", &["Republic of Namibia"]),
    c("NC", "NCL", "New Caledonia", &[]),
    c("NE", "NER", "Niger", &["Republic of the Niger"]),
    c("NF", "NFK", "Norfolk Island", &[]),
    c("NG", "NGA", "Nigeria", &["Federal Republic of Nigeria"]),
    c("NI", "NIC", "Nicaragua", &["Republic of Nicaragua"]),
    c("NU", "NIU", "Niue", &[]),
    c("NL", "NLD", "Netherlands", &["Kingdom of the Netherlands"]),
    c("NO", "NOR", "Norway", &["Kingdom of Norway"]),
    c("NP", "NPL", "Nepal", &["Federal Democratic Republic of Nepal"]),
    c("NR", "NRU", "Nauru", &["Republic of Nauru"]),
    c("NZ", "NZL", "New Zealand", &[]),
    c("OM", "OMN", "Oman", &["Sultanate of Oman"]),
    c("PK", "PAK", "Pakistan", &["Islamic Republic of Pakistan"]),
    c("PA", "PAN", "Panama", &["Republic of Panama"]),
    c("PN", "PCN", "Pitcairn", &[]),
    c("PE", "PER", "Peru", &["Republic of Peru"]),
    c("PH", "PHL", "Philippines", &["Republic of the Philippines"]),
    c("PW", "PLW", "Palau", &["Republic of Palau"]),
    c("PG", "PNG", "Papua New Guinea", &["Independent State of Papua New Guinea"]),
    c("PL", "POL", "Poland", &["Republic of Poland"]),
    c("PR", "PRI", "Puerto Rico", &[]),
    c("KP", "PRK", "Korea, Democratic People's Republic of", &["Democratic People's Republic of Korea"]),
    c("PT", "PRT", "Portugal", &["Portuguese Republic"]),
    c("PY", "PRY", "Paraguay", &["Republic of Paraguay"]),
    c("PS", "PSE", "Palestine, State of", &["the State of Palestine", "Palestine"]),
    c("PF", "PYF", "French Polynesia", &[]),
    c("QA", "QAT", "Qatar", &["State of Qatar"]),
    c("RE", "REU", "Réunion", &[]),
    c("RO", "ROU", "Romania", &[]),
    c("RU", "RUS", "Russian Federation", &[]),
    c("RW", "RWA", "Rwanda", &["Rwandese Republic"]),
    c("SA", "SAU", "Saudi Arabia", &["Kingdom of Saudi Arabia"]),
    c("SD", "SDN", "Sudan", &["Republic of the Sudan"]),
    c("SN", "SEN", "Senegal", &["Republic of Senegal"]),
    c("SG", "SGP", "Singapore", &["Republic of Singapore"]),
    c("GS", "SGS", "South Georgia and the South Sandwich Islands", &[]),
    c("SH", "SHN", "Saint Helena, Ascension and Tristan da Cunha", &[]),
    c("SJ", "SJM", "Svalbard and Jan Mayen", &[]),
    c("SB", "SLB", "Solomon Islands", &[]),
    c("SL", "SLE", "Sierra Leone", &["Republic of Sierra Leone"]),
    c("SV", "SLV", "El Salvador", &["Republic of El Salvador"]),
    c("SM", "SMR", "San Marino", &["Republic of San Marino"]),
    c("SO", "SOM", "Somalia", &["Federal Republic of Somalia"]),
    c("PM", "SPM", "Saint Pierre and Miquelon", &[]),
    c("RS", "SRB", "Serbia", &["Republic of Serbia"]),
    c("SS", "SSD", "South Sudan", &["Republic of South Sudan"]),
    c("ST", "STP", "Sao Tome and Principe", &["Democratic Republic of Sao Tome and Principe"]),
    c("SR", "SUR", "Suriname", &["Republic of Suriname"]),
    c("SK", "SVK", "Slovakia", &["Slovak Republic"]),
    c("SI", "SVN", "Slovenia", &["Republic of Slovenia"]),
    c("SE", "SWE", "Sweden", &["Kingdom of Sweden"]),
    c("SZ", "SWZ", "Eswatini", &["Kingdom of Eswatini"]),
    c("SX", "SXM", "Sint Maarten (Dutch part)", &[]),
    c("SC", "SYC", "Seychelles", &["Republic of Seychelles"]),
    c("SY", "SYR", "Syrian Arab Republic", &["Syria"]),
    c("TC", "TCA", "Turks and Caicos Islands", &[]),
    c("TD", "TCD", "Chad", &["Republic of Chad"]),
    c("TG", "TGO", "Togo", &["Togolese Republic"]),
    c("TH", "THA", "Thailand", &["Kingdom of Thailand"]),
    c("TJ", "TJK", "Tajikistan", &["Republic of Tajikistan"]),
    c("TK", "TKL", "Tokelau", &[]),
    c("TM", "TKM", "Turkmenistan", &[]),
    c("TL", "TLS", "Timor-Leste", &["Democratic Republic of Timor-Leste"]),
    c("TO", "TON", "Tonga", &["Kingdom of Tonga"]),
    c("TT", "TTO", "Trinidad and Tobago", &["Republic of Trinidad and Tobago"]),
    c("TN", "TUN", "Tunisia", &["Republic of Tunisia"]),
    c("TR", "TUR", "Türkiye", &["Republic of Türkiye"]),
    c("TV", "TUV", "Tuvalu", &[]),
    c("TW", "TWN", "Taiwan, Province of China", &["Taiwan"]),
    c("TZ", "TZA", "Tanzania, United Republic of", &["United Republic of Tanzania", "Tanzania"]),
    c("UG", "UGA", "Uganda", &["Republic of Uganda"]),
    c("UA", "UKR", "Ukraine", &[]),
    c("UM", "UMI", "United States Minor Outlying Islands", &[]),
    c("UY", "URY", "Uruguay", &["Eastern Republic of Uruguay"]),
    c("US", "USA", "United States", &["United States of America"]),
    c("UZ", "UZB", "Uzbekistan", &["Republic of Uzbekistan"]),
    c("VA", "VAT", "Holy See (Vatican City State)", &[]),
    c("VC", "VCT", "Saint Vincent and the Grenadines", &[]),
    c("VE", "VEN", "Venezuela, Bolivarian Republic of", &["Bolivarian Republic of Venezuela", "Venezuela"]),
    c("VG", "VGB", "Virgin Islands, British", &["British Virgin Islands"]),
    c("VI", "VIR", "Virgin Islands, U.S.", &["Virgin Islands of the United States"]),
    c("VN", "VNM", "Viet Nam", &["Socialist Republic of Viet Nam", "Vietnam"]),
    c("VU", "VUT", "Vanuatu", &["Republic of Vanuatu"]),
    c("WF", "WLF", "Wallis and Futuna", &[]),
    c("WS", "WSM", "Samoa", &["Independent State of Samoa"]),
    c("YE", "YEM", "Yemen", &["Republic of Yemen"]),
    c("ZA", "ZAF", "South Africa", &["Republic of South Africa"]),
    c("ZM", "ZMB", "Zambia", &["Republic of Zambia"]),
    c("ZW", "ZWE", "Zimbabwe", &["Republic of Zimbabwe"]),
];

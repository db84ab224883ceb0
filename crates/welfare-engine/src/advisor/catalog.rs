use super::domain::{Gender, Occupation, Scheme, SchemeDomain};

/// Reference list of central welfare schemes used when callers do not
/// supply their own catalog.
#[derive(Debug)]
pub struct SchemeCatalog {
    schemes: Vec<Scheme>,
}

impl SchemeCatalog {
    pub fn standard() -> Self {
        Self {
            schemes: standard_schemes(),
        }
    }

    pub fn with_schemes(schemes: Vec<Scheme>) -> Self {
        Self { schemes }
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn find(&self, id: &str) -> Option<&Scheme> {
        self.schemes.iter().find(|scheme| scheme.id == id)
    }

    pub fn for_domain(&self, domain: SchemeDomain) -> Vec<&Scheme> {
        self.schemes
            .iter()
            .filter(|scheme| scheme.domain == domain)
            .collect()
    }
}

fn standard_schemes() -> Vec<Scheme> {
    vec![
        Scheme {
            id: "edu-1",
            name: "National Scholarship Portal (NSP)",
            domain: SchemeDomain::Education,
            description: "Central scholarships for school and college students from low-income households, disbursed through a single portal.",
            min_age: 6,
            max_age: 30,
            income_limit: 250_000,
            occupation_required: vec![Occupation::Student],
            gender_required: None,
            benefits: vec![
                "Tuition and maintenance allowance credited each academic year.",
                "Single application covers pre-matric and post-matric awards.",
            ],
            risks: vec!["Renewal lapses without annual mark sheet upload."],
            required_documents: vec!["Aadhaar", "Income certificate", "Previous mark sheet", "Bank passbook"],
            estimated_financial_impact: "Rs 10,000-50,000 per year",
            portal_url: Some("https://scholarships.gov.in"),
        },
        Scheme {
            id: "edu-2",
            name: "PM YASASVI Scholarship",
            domain: SchemeDomain::Education,
            description: "Merit scholarships for OBC, EBC and DNT students in classes 9 to 12 at notified schools.",
            min_age: 12,
            max_age: 20,
            income_limit: 250_000,
            occupation_required: vec![Occupation::Student],
            gender_required: None,
            benefits: vec!["Annual scholarship of up to Rs 1.25 lakh for top-tier awardees."],
            risks: vec!["Entrance-test based; seats are limited."],
            required_documents: vec!["Aadhaar", "Caste certificate", "Income certificate", "School enrollment proof"],
            estimated_financial_impact: "Rs 75,000-125,000 per year",
            portal_url: Some("https://yet.nta.ac.in"),
        },
        Scheme {
            id: "agri-1",
            name: "PM-KISAN Samman Nidhi",
            domain: SchemeDomain::Agriculture,
            description: "Income support of Rs 6,000 per year for landholding farmer families, paid in three installments.",
            min_age: 18,
            max_age: 100,
            income_limit: 300_000,
            occupation_required: vec![Occupation::Farmer],
            gender_required: None,
            benefits: vec![
                "Rs 2,000 transferred directly to the bank account every four months.",
                "No repayment obligation; continues while land records match.",
            ],
            risks: vec!["Installments pause when e-KYC or land seeding is incomplete."],
            required_documents: vec!["Aadhaar", "Land record extract", "Bank passbook"],
            estimated_financial_impact: "Rs 6,000 per year",
            portal_url: Some("https://pmkisan.gov.in"),
        },
        Scheme {
            id: "agri-2",
            name: "Kisan Credit Card (KCC)",
            domain: SchemeDomain::Agriculture,
            description: "Revolving crop credit at subsidized interest for farmers, with prompt-repayment incentive.",
            min_age: 18,
            max_age: 75,
            income_limit: 400_000,
            occupation_required: vec![Occupation::Farmer],
            gender_required: None,
            benefits: vec![
                "Credit up to Rs 3 lakh at 7% interest, effectively 4% on timely repayment.",
                "Covers cultivation, post-harvest, and allied activity expenses.",
            ],
            risks: vec!["Default converts the facility to a standard-rate term loan."],
            required_documents: vec!["Aadhaar", "Land record extract", "Passport photo", "Bank account details"],
            estimated_financial_impact: "Up to Rs 300,000 credit line",
            portal_url: None,
        },
        Scheme {
            id: "health-1",
            name: "Ayushman Bharat PM-JAY",
            domain: SchemeDomain::Health,
            description: "Cashless hospitalization cover of Rs 5 lakh per family per year at empanelled hospitals.",
            min_age: 0,
            max_age: 120,
            income_limit: 250_000,
            occupation_required: Vec::new(),
            gender_required: None,
            benefits: vec![
                "Rs 5 lakh annual family floater for secondary and tertiary care.",
                "Pre-existing conditions covered from day one.",
            ],
            risks: vec!["Treatment limited to empanelled hospitals and listed packages."],
            required_documents: vec!["Aadhaar", "Ration card or SECC inclusion proof"],
            estimated_financial_impact: "Rs 500,000 cover per year",
            portal_url: Some("https://pmjay.gov.in"),
        },
        Scheme {
            id: "health-2",
            name: "Janani Suraksha Yojana",
            domain: SchemeDomain::Health,
            description: "Cash assistance for institutional delivery to reduce maternal and neonatal mortality.",
            min_age: 18,
            max_age: 45,
            income_limit: 200_000,
            occupation_required: Vec::new(),
            gender_required: Some(Gender::Female),
            benefits: vec!["One-time cash incentive paid after delivery at a public health facility."],
            risks: vec!["Benefit requires registration with the local ASHA worker during pregnancy."],
            required_documents: vec!["Aadhaar", "Mother and child protection card", "Bank passbook"],
            estimated_financial_impact: "Rs 700-1,400 one-time",
            portal_url: None,
        },
        Scheme {
            id: "women-1",
            name: "Mahila Samman Savings Certificate",
            domain: SchemeDomain::Women,
            description: "Two-year small savings certificate for women with a fixed 7.5% interest rate.",
            min_age: 18,
            max_age: 100,
            income_limit: 500_000,
            occupation_required: Vec::new(),
            gender_required: Some(Gender::Female),
            benefits: vec!["Deposit up to Rs 2 lakh with guaranteed returns and partial withdrawal."],
            risks: vec!["Interest taxable; scheme window is time-limited."],
            required_documents: vec!["Aadhaar", "PAN", "Post office or bank KYC form"],
            estimated_financial_impact: "Up to Rs 32,000 interest over two years",
            portal_url: None,
        },
        Scheme {
            id: "women-2",
            name: "PM Matru Vandana Yojana",
            domain: SchemeDomain::Women,
            description: "Maternity benefit of Rs 5,000 for the first living child, paid in installments.",
            min_age: 19,
            max_age: 45,
            income_limit: 300_000,
            occupation_required: Vec::new(),
            gender_required: Some(Gender::Female),
            benefits: vec!["Direct benefit transfer in installments tied to antenatal checkups."],
            risks: vec!["Claims lapse if registration happens after the eligibility window."],
            required_documents: vec!["Aadhaar", "Mother and child protection card", "Bank passbook"],
            estimated_financial_impact: "Rs 5,000 one-time",
            portal_url: Some("https://pmmvy.wcd.gov.in"),
        },
        Scheme {
            id: "senior-1",
            name: "Indira Gandhi National Old Age Pension (IGNOAP)",
            domain: SchemeDomain::Senior,
            description: "Monthly pension for citizens aged 60 and above from below-poverty-line households.",
            min_age: 60,
            max_age: 120,
            income_limit: 100_000,
            occupation_required: Vec::new(),
            gender_required: None,
            benefits: vec!["Monthly pension credited directly; higher slab after age 80."],
            risks: vec!["Requires BPL listing; state top-ups vary widely."],
            required_documents: vec!["Aadhaar", "Age proof", "BPL card", "Bank passbook"],
            estimated_financial_impact: "Rs 200-500 per month plus state top-up",
            portal_url: Some("https://nsap.nic.in"),
        },
        Scheme {
            id: "senior-2",
            name: "Rashtriya Vayoshri Yojana",
            domain: SchemeDomain::Senior,
            description: "Free assisted-living devices for senior citizens with age-related disabilities.",
            min_age: 60,
            max_age: 120,
            income_limit: 150_000,
            occupation_required: Vec::new(),
            gender_required: None,
            benefits: vec!["Walking sticks, hearing aids, spectacles, and dentures at no cost."],
            risks: vec!["Distribution runs through periodic camps; waiting times vary."],
            required_documents: vec!["Aadhaar", "Age proof", "BPL card", "Disability assessment"],
            estimated_financial_impact: "Devices worth Rs 5,000-15,000",
            portal_url: None,
        },
        Scheme {
            id: "msme-1",
            name: "PM MUDRA Yojana",
            domain: SchemeDomain::Msme,
            description: "Collateral-free loans up to Rs 10 lakh for non-farm micro enterprises.",
            min_age: 18,
            max_age: 65,
            income_limit: 600_000,
            occupation_required: vec![Occupation::SelfEmployed, Occupation::Unemployed],
            gender_required: None,
            benefits: vec![
                "Shishu, Kishor, and Tarun slabs matched to business maturity.",
                "No collateral or third-party guarantee required.",
            ],
            risks: vec!["Loan liability is personal; default affects credit history."],
            required_documents: vec!["Aadhaar", "Business plan or quotation", "Bank statement"],
            estimated_financial_impact: "Rs 50,000-1,000,000 loan",
            portal_url: Some("https://mudra.org.in"),
        },
        Scheme {
            id: "msme-2",
            name: "PM Vishwakarma",
            domain: SchemeDomain::Msme,
            description: "Recognition, training stipend, and concessional credit for traditional artisans and trades.",
            min_age: 18,
            max_age: 70,
            income_limit: 400_000,
            occupation_required: vec![Occupation::SelfEmployed, Occupation::DailyWageWorker],
            gender_required: None,
            benefits: vec![
                "Rs 15,000 toolkit incentive after skill verification.",
                "Credit up to Rs 3 lakh at 5% in two tranches.",
            ],
            risks: vec!["Limited to the 18 notified family trades."],
            required_documents: vec!["Aadhaar", "Trade declaration", "Bank passbook"],
            estimated_financial_impact: "Rs 15,000 grant plus Rs 300,000 credit",
            portal_url: Some("https://pmvishwakarma.gov.in"),
        },
        Scheme {
            id: "fin-1",
            name: "PM Jan Dhan Yojana",
            domain: SchemeDomain::Financial,
            description: "Zero-balance bank account with RuPay card, accident cover, and overdraft facility.",
            min_age: 10,
            max_age: 120,
            income_limit: 1_000_000,
            occupation_required: Vec::new(),
            gender_required: None,
            benefits: vec![
                "Rs 2 lakh accident insurance with the RuPay debit card.",
                "Overdraft up to Rs 10,000 after satisfactory operation.",
            ],
            risks: vec!["Overdraft eligibility depends on account activity."],
            required_documents: vec!["Aadhaar or any officially valid document"],
            estimated_financial_impact: "Rs 200,000 accident cover",
            portal_url: Some("https://pmjdy.gov.in"),
        },
        Scheme {
            id: "fin-2",
            name: "Atal Pension Yojana",
            domain: SchemeDomain::Financial,
            description: "Guaranteed monthly pension of Rs 1,000-5,000 after 60 for unorganized-sector workers.",
            min_age: 18,
            max_age: 40,
            income_limit: 500_000,
            occupation_required: Vec::new(),
            gender_required: None,
            benefits: vec![
                "Defined pension backed by the central government.",
                "Spouse continuation and nominee corpus on demise.",
            ],
            risks: vec!["Contributions auto-debit monthly until age 60."],
            required_documents: vec!["Aadhaar", "Active savings account", "Mobile number"],
            estimated_financial_impact: "Rs 1,000-5,000 monthly pension after 60",
            portal_url: None,
        },
    ]
}

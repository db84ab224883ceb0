use super::domain::{EducationLevel, FutureRecommendation, Occupation, Profile};

const MAX_PLAN_ENTRIES: usize = 8;

/// Builds the forward-looking advisory plan. Checks run in a fixed
/// priority order and the plan is capped at eight entries, so the
/// trailing checks only surface when earlier ones do not fire.
pub fn plan_future_recommendations(profile: &Profile) -> Vec<FutureRecommendation> {
    let mut plan = Vec::new();

    if !profile.has_health_insurance {
        plan.push(FutureRecommendation {
            year_range: "0–2 years",
            title: "Health coverage",
            action: "Apply for Ayushman Bharat (PM-JAY) on the official portal to get Rs 5 lakh family health cover.",
        });
    }

    if !profile.has_pension && profile.age >= 45 {
        plan.push(FutureRecommendation {
            year_range: if profile.age >= 55 {
                "0–1 year"
            } else {
                "5–10 years"
            },
            title: "Pension planning",
            action: "Enroll in Indira Gandhi National Old Age Pension (IGNOAP) when you turn 60. Check NSAP portal for eligibility.",
        });
    }

    if (58..65).contains(&profile.age) {
        plan.push(FutureRecommendation {
            year_range: "0–2 years",
            title: "Senior citizen schemes",
            action: "You will be eligible for senior pension and Rashtriya Vayoshri Yojana soon. Keep Aadhaar and BPL documents ready.",
        });
    }

    if profile.household_has(Occupation::Student) {
        plan.push(FutureRecommendation {
            year_range: "0–5 years",
            title: "Education support",
            action: "Apply for National Scholarship Portal (NSP) when the student is in class 9 or above. Renew annually with mark sheets.",
        });
    }

    if profile.household_has(Occupation::Farmer) {
        plan.push(FutureRecommendation {
            year_range: "0–10 years",
            title: "Agriculture schemes",
            action: "Keep PM-KISAN and Kisan Credit Card (KCC) updated. Get Soil Health Card every 2 years for better crop planning.",
        });
    }

    if profile.family_size >= 4 && profile.household_income() < 300_000 {
        plan.push(FutureRecommendation {
            year_range: "0–5 years",
            title: "Family welfare",
            action: "Apply for PM-JAY for entire family. Consider Skill India or MUDRA if any member wants to start a small business.",
        });
    }

    if profile.household_has(Occupation::Housewife) || profile.household_has(Occupation::Homemaker)
    {
        plan.push(FutureRecommendation {
            year_range: "0–10 years",
            title: "Women & livelihood",
            action: "Check Beti Bachao Beti Padhao for girl children and Mahila Shakti Kendra for skill development on WCD portal.",
        });
    }

    plan.push(FutureRecommendation {
        year_range: "0–10 years",
        title: "Financial inclusion",
        action: "Ensure all family members have PM Jan Dhan accounts. Link Aadhaar for direct benefit transfers.",
    });

    if matches!(
        profile.education,
        EducationLevel::None | EducationLevel::Primary
    ) {
        plan.push(FutureRecommendation {
            year_range: "0–5 years",
            title: "Adult education",
            action: "Enroll in Digital Literacy or Skill India programs to improve employability and access to more schemes.",
        });
    }

    plan.truncate(MAX_PLAN_ENTRIES);
    plan
}

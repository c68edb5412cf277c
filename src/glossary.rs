//! Human-readable labels for model features.

use std::collections::HashMap;

/// Built-in feature labels, one entry per feature.
const ENTRIES: &[(&str, &str)] = &[
    // Required form fields
    ("EXT_SOURCE_1", "External source score 1"),
    ("EXT_SOURCE_2", "External source score 2"),
    ("EXT_SOURCE_3", "External source score 3"),
    ("AMT_CREDIT", "Requested credit amount"),
    ("AMT_ANNUITY", "Loan annuity"),
    ("DAYS_BIRTH", "Client age (days, negative)"),
    ("DAYS_EMPLOYED", "Current employment length (days, negative, 365243 if not employed)"),
    ("DAYS_ID_PUBLISH", "Time since last ID document update (days, negative)"),
    (
        "SK_ID_CURR_CNT_INSTALMENT_FUTURE_mean",
        "Mean outstanding future instalments (previous credits)",
    ),
    ("SK_ID_CURR_DAYS_CREDIT_ENDDATE_max", "Latest end date of past credits (days)"),
    ("CODE_GENDER", "Gender"),
    ("NAME_EDUCATION_TYPE", "Education level"),
    ("NAME_FAMILY_STATUS", "Family status"),
    ("AMT_INCOME_TOTAL", "Total annual income"),
    ("CNT_CHILDREN", "Number of children"),
    ("FLAG_OWN_CAR", "Owns a car"),
    ("FLAG_OWN_REALTY", "Owns real estate"),
    ("OCCUPATION_TYPE", "Occupation"),
    ("REGION_POPULATION_RELATIVE", "Population density of the home region"),
    ("HOUR_APPR_PROCESS_START", "Hour the application was started"),
    // Application descriptors
    ("NAME_CONTRACT_TYPE", "Contract type"),
    ("NAME_TYPE_SUITE", "Accompanying person at application"),
    ("NAME_INCOME_TYPE", "Income type"),
    ("NAME_HOUSING_TYPE", "Housing type"),
    ("WEEKDAY_APPR_PROCESS_START", "Weekday the application was started"),
    ("ORGANIZATION_TYPE", "Employer organization type"),
    ("FONDKAPREMONT_MODE", "Capital repairs fund mode"),
    ("HOUSETYPE_MODE", "House type"),
    ("WALLSMATERIAL_MODE", "Wall material"),
    ("EMERGENCYSTATE_MODE", "Building emergency state"),
    ("REGION_RATING_CLIENT", "Region rating"),
    ("REGION_RATING_CLIENT_W_CITY", "Region rating including city"),
    ("YEARS_BEGINEXPLUATATION_AVG", "Mean years since building commissioning"),
    // Aggregates over previous credits
    ("SK_ID_CURR_AMT_GOODS_PRICE_mean", "Mean goods price of previous credits"),
    ("SK_ID_CURR_AMT_PAYMENT_CURRENT_mean", "Mean current payment of credits"),
    ("SK_ID_CURR_AMT_INSTALMENT_mean", "Mean instalment amount of previous credits"),
    ("SK_ID_CURR_AMT_CREDIT_SUM_DEBT_sum", "Total debt of previous credits"),
    ("SK_ID_CURR_AMT_CREDIT_SUM_DEBT_mean", "Mean debt of previous credits"),
    ("SK_ID_CURR_AMT_ANNUITY_mean", "Mean annuity of previous credits"),
    ("SK_ID_CURR_AMT_TOTAL_RECEIVABLE_sum", "Total receivable of previous credits"),
    ("SK_ID_CURR_AMT_TOTAL_RECEIVABLE_max", "Maximum receivable of previous credits"),
    ("SK_ID_CURR_AMT_RECEIVABLE_PRINCIPAL_sum", "Total receivable principal of previous credits"),
    ("SK_ID_CURR_AMT_CREDIT_SUM_sum", "Total credit amount of previous credits"),
    ("SK_ID_CURR_AMT_CREDIT_mean", "Mean credit amount of previous credits"),
    ("SK_ID_CURR_CNT_INSTALMENT_mean", "Mean instalment count of previous credits"),
    ("SK_ID_CURR_CNT_INSTALMENT_max", "Maximum instalment count of previous credits"),
    ("SK_ID_CURR_MONTHS_BALANCE_max_x", "Latest month of the bureau history"),
    ("SK_ID_CURR_MONTHS_BALANCE_min_y", "Earliest month of the POS/cash balance history"),
    ("SK_ID_CURR_PAYMENT_DIFF_sum", "Total payment differences of previous credits"),
    ("SK_ID_CURR_DBD_sum_x", "Total days before due date (bureau)"),
    ("SK_ID_CURR_DBD_max_y", "Maximum days before due date (POS/cash)"),
    ("SK_ID_CURR_DBD_mean_y", "Mean days before due date (POS/cash)"),
    ("SK_ID_CURR_SK_DPD_mean_x", "Mean days past due (bureau)"),
    ("SK_ID_CURR_SK_DPD_mean_y", "Mean days past due with tolerance (POS/cash)"),
    ("SK_ID_CURR_SK_DPD_DEF_max_x", "Maximum days past due with tolerance (bureau)"),
    ("SK_ID_CURR_DPD_sum_y", "Total days past due (POS/cash)"),
    ("SK_ID_CURR_AMT_CREDIT_LIMIT_ACTUAL_min", "Minimum current credit limit"),
    ("SK_ID_CURR_AMT_DRAWINGS_POS_CURRENT_mean", "Mean current POS drawings"),
    ("SK_ID_CURR_AMT_DRAWINGS_CURRENT_mean", "Mean current drawings amount"),
    ("SK_ID_CURR_CNT_DRAWINGS_POS_CURRENT_sum", "Total current POS drawings"),
    ("SK_ID_CURR_CNT_DRAWINGS_ATM_CURRENT_sum", "Total current ATM drawings"),
    ("SK_ID_CURR_CNT_DRAWINGS_ATM_CURRENT_max", "Maximum current ATM drawings"),
    ("SK_ID_CURR_CNT_DRAWINGS_CURRENT_mean", "Mean current drawings count"),
    ("SK_ID_CURR_RATE_INTEREST_PRIVILEGED_mean", "Mean privileged interest rate"),
    // Credit bureau status and type
    ("SK_ID_CURR_CREDIT_ACTIVE_Active_mean", "Share of active credits"),
    ("SK_ID_CURR_CREDIT_ACTIVE_Closed_mean", "Share of closed credits"),
    ("SK_ID_CURR_CREDIT_ACTIVE_Sold_mean", "Share of sold credits"),
    ("SK_ID_CURR_CREDIT_ACTIVE_Bad_debt_mean", "Share of bad debts"),
    ("SK_ID_CURR_CREDIT_TYPE_Car_loan_mean", "Share of car loans"),
    ("SK_ID_CURR_CREDIT_TYPE_Mortgage_mean", "Share of mortgages"),
    ("SK_ID_CURR_CREDIT_TYPE_Real_estate_loan_mean", "Share of real estate loans"),
    ("SK_ID_CURR_CREDIT_TYPE_Consumer_credit_mean", "Share of consumer credits"),
    ("SK_ID_CURR_CREDIT_TYPE_Credit_card_mean", "Share of credit cards"),
    ("SK_ID_CURR_CREDIT_TYPE_Microloan_mean", "Share of microloans"),
    ("SK_ID_CURR_CREDIT_TYPE_Interbank_credit_mean", "Share of interbank credits"),
    ("SK_ID_CURR_CREDIT_TYPE_Cash_loan_nonearmarked_mean", "Share of non-earmarked cash loans"),
    ("SK_ID_CURR_CREDIT_TYPE_Another_type_of_loan_mean", "Share of other loan types"),
    ("SK_ID_CURR_CREDIT_TYPE_Unknown_type_of_loan_mean", "Share of unknown loan types"),
    ("SK_ID_CURR_CREDIT_TYPE_Mobile_operator_loan_mean", "Share of mobile operator loans"),
    (
        "SK_ID_CURR_CREDIT_TYPE_Loan_for_business_development_mean",
        "Share of business development loans",
    ),
    (
        "SK_ID_CURR_CREDIT_TYPE_Loan_for_working_capital_replenishment_mean",
        "Share of working capital replenishment loans",
    ),
    (
        "SK_ID_CURR_CREDIT_TYPE_Loan_for_the_purchase_of_equipment_mean",
        "Share of equipment purchase loans",
    ),
    (
        "SK_ID_CURR_CREDIT_TYPE_Loan_for_purchase_of_shares_margin_lending_mean",
        "Share of share purchase or margin lending loans",
    ),
    // Contract status of previous applications
    ("SK_ID_CURR_NAME_CONTRACT_STATUS_Approved_mean", "Share of approved contracts"),
    (
        "SK_ID_CURR_NAME_CONTRACT_STATUS_Approved_mean_y",
        "Share of approved contracts (previous applications)",
    ),
    ("SK_ID_CURR_NAME_CONTRACT_STATUS_Refused_mean_x", "Share of refused contracts (bureau)"),
    (
        "SK_ID_CURR_NAME_CONTRACT_STATUS_Refused_mean_y",
        "Share of refused contracts (previous applications)",
    ),
    ("SK_ID_CURR_NAME_CONTRACT_STATUS_Canceled_mean_x", "Share of canceled contracts (bureau)"),
    (
        "SK_ID_CURR_NAME_CONTRACT_STATUS_Canceled_mean_y",
        "Share of canceled contracts (previous applications)",
    ),
    ("SK_ID_CURR_NAME_CONTRACT_STATUS_Signed_mean_x", "Share of signed contracts (bureau)"),
    (
        "SK_ID_CURR_NAME_CONTRACT_STATUS_Signed_mean_y",
        "Share of signed contracts (previous applications)",
    ),
    ("SK_ID_CURR_NAME_CONTRACT_STATUS_Active_mean_x", "Share of active contracts (bureau)"),
    (
        "SK_ID_CURR_NAME_CONTRACT_STATUS_Active_mean_y",
        "Share of active contracts (previous applications)",
    ),
    ("SK_ID_CURR_NAME_CONTRACT_STATUS_Completed_mean_x", "Share of completed contracts (bureau)"),
    (
        "SK_ID_CURR_NAME_CONTRACT_STATUS_Completed_mean_y",
        "Share of completed contracts (previous applications)",
    ),
    ("SK_ID_CURR_NAME_CONTRACT_STATUS_Demand_mean_x", "Share of demanded contracts (bureau)"),
    (
        "SK_ID_CURR_NAME_CONTRACT_STATUS_Demand_mean_y",
        "Share of demanded contracts (previous applications)",
    ),
    ("SK_ID_CURR_NAME_CONTRACT_STATUS_XNA_mean", "Share of contracts with unspecified status"),
    (
        "SK_ID_CURR_NAME_CONTRACT_STATUS_Sent_proposal_mean",
        "Share of contracts with a sent proposal",
    ),
    (
        "SK_ID_CURR_NAME_CONTRACT_STATUS_Returned_to_the_store_mean",
        "Share of contracts returned to the store",
    ),
    ("SK_ID_CURR_NAME_CONTRACT_STATUS_Amortized_debt_mean", "Share of amortized debts"),
    ("SK_ID_CURR_NAME_CONTRACT_STATUS_Unused_offer_mean", "Share of unused offers"),
    // Contract, client and product types
    ("SK_ID_CURR_NAME_CONTRACT_TYPE_Cash_loans_mean", "Share of cash loans"),
    ("SK_ID_CURR_NAME_CONTRACT_TYPE_Consumer_loans_mean", "Share of consumer loans"),
    ("SK_ID_CURR_NAME_CONTRACT_TYPE_Revolving_loans_mean", "Share of revolving loans"),
    ("SK_ID_CURR_NAME_CONTRACT_TYPE_XNA_mean", "Share of contracts of unspecified type"),
    ("SK_ID_CURR_NAME_CLIENT_TYPE_New_mean", "Share of applications as a new client"),
    ("SK_ID_CURR_NAME_CLIENT_TYPE_Repeater_mean", "Share of applications as a repeat client"),
    ("SK_ID_CURR_NAME_CLIENT_TYPE_XNA_mean", "Share of applications with unspecified client type"),
    ("SK_ID_CURR_NAME_PRODUCT_TYPE_walkin_mean", "Share of walk-in products"),
    ("SK_ID_CURR_NAME_PRODUCT_TYPE_xsell_mean", "Share of cross-sell products"),
    ("SK_ID_CURR_NAME_PRODUCT_TYPE_XNA_mean", "Share of products of unspecified type"),
    ("SK_ID_CURR_NAME_PORTFOLIO_POS_mean", "Share of POS portfolio applications"),
    ("SK_ID_CURR_NAME_PORTFOLIO_Cash_mean", "Share of cash portfolio applications"),
    ("SK_ID_CURR_NAME_PORTFOLIO_Cards_mean", "Share of card portfolio applications"),
    ("SK_ID_CURR_NAME_PORTFOLIO_Cars_mean", "Share of car portfolio applications"),
    ("SK_ID_CURR_NAME_PORTFOLIO_XNA_mean", "Share of applications with unspecified portfolio"),
    ("SK_ID_CURR_NAME_YIELD_GROUP_high_mean", "Share of high-yield applications"),
    ("SK_ID_CURR_NAME_YIELD_GROUP_middle_mean", "Share of middle-yield applications"),
    ("SK_ID_CURR_NAME_YIELD_GROUP_low_normal_mean", "Share of low-normal yield applications"),
    ("SK_ID_CURR_NAME_YIELD_GROUP_low_action_mean", "Share of low-action yield applications"),
    ("SK_ID_CURR_NAME_YIELD_GROUP_XNA_mean", "Share of applications with unspecified yield group"),
    ("SK_ID_CURR_FLAG_LAST_APPL_PER_CONTRACT_Y_mean", "Share of last applications per contract"),
    // Payment types and rejection reasons
    (
        "SK_ID_CURR_NAME_PAYMENT_TYPE_Cash_through_the_bank_mean",
        "Share of cash payments through the bank",
    ),
    (
        "SK_ID_CURR_NAME_PAYMENT_TYPE_Noncash_from_your_account_mean",
        "Share of non-cash payments from the client's account",
    ),
    (
        "SK_ID_CURR_NAME_PAYMENT_TYPE_Cashless_from_the_account_of_the_employer_mean",
        "Share of cashless payments from the employer's account",
    ),
    ("SK_ID_CURR_NAME_PAYMENT_TYPE_XNA_mean", "Share of unspecified payment types"),
    ("SK_ID_CURR_CODE_REJECT_REASON_XAP_mean", "Share of rejections coded XAP"),
    ("SK_ID_CURR_CODE_REJECT_REASON_XNA_mean", "Share of rejections with unspecified reason"),
    ("SK_ID_CURR_CODE_REJECT_REASON_HC_mean", "Share of rejections coded HC"),
    ("SK_ID_CURR_CODE_REJECT_REASON_LIMIT_mean", "Share of rejections due to limit"),
    ("SK_ID_CURR_CODE_REJECT_REASON_SCO_mean", "Share of rejections coded SCO"),
    ("SK_ID_CURR_CODE_REJECT_REASON_SCOFR_mean", "Share of rejections coded SCOFR"),
    ("SK_ID_CURR_CODE_REJECT_REASON_CLIENT_mean", "Share of rejections by client decision"),
    ("SK_ID_CURR_CODE_REJECT_REASON_SYSTEM_mean", "Share of rejections by the system"),
    ("SK_ID_CURR_CODE_REJECT_REASON_VERIF_mean", "Share of rejections at verification"),
    // Sales channels and seller industries
    (
        "SK_ID_CURR_CHANNEL_TYPE_Countrywide_mean",
        "Share of applications through the national channel",
    ),
    (
        "SK_ID_CURR_CHANNEL_TYPE_Regional__Local_mean",
        "Share of applications through regional or local channels",
    ),
    ("SK_ID_CURR_CHANNEL_TYPE_Stone_mean", "Share of applications through the 'Stone' channel"),
    (
        "SK_ID_CURR_CHANNEL_TYPE_Credit_and_cash_offices_mean",
        "Share of applications at credit and cash offices",
    ),
    (
        "SK_ID_CURR_CHANNEL_TYPE_Contact_center_mean",
        "Share of applications through the contact center",
    ),
    ("SK_ID_CURR_CHANNEL_TYPE_Car_dealer_mean", "Share of applications through car dealers"),
    (
        "SK_ID_CURR_CHANNEL_TYPE_AP_Cash_loan_mean",
        "Share of applications through the 'AP Cash loan' channel",
    ),
    (
        "SK_ID_CURR_CHANNEL_TYPE_Channel_of_corporate_sales_mean",
        "Share of applications through corporate sales",
    ),
    (
        "SK_ID_CURR_NAME_SELLER_INDUSTRY_Connectivity_mean",
        "Share of applications in the connectivity industry",
    ),
    (
        "SK_ID_CURR_NAME_SELLER_INDUSTRY_Consumer_electronics_mean",
        "Share of applications in the consumer electronics industry",
    ),
    (
        "SK_ID_CURR_NAME_SELLER_INDUSTRY_Industry_mean",
        "Share of applications in the industry sector",
    ),
    (
        "SK_ID_CURR_NAME_SELLER_INDUSTRY_Clothing_mean",
        "Share of applications in the clothing industry",
    ),
    (
        "SK_ID_CURR_NAME_SELLER_INDUSTRY_Furniture_mean",
        "Share of applications in the furniture industry",
    ),
    (
        "SK_ID_CURR_NAME_SELLER_INDUSTRY_Construction_mean",
        "Share of applications in the construction industry",
    ),
    (
        "SK_ID_CURR_NAME_SELLER_INDUSTRY_Auto_technology_mean",
        "Share of applications in the auto technology industry",
    ),
    (
        "SK_ID_CURR_NAME_SELLER_INDUSTRY_Tourism_mean",
        "Share of applications in the tourism industry",
    ),
    (
        "SK_ID_CURR_NAME_SELLER_INDUSTRY_MLM_partners_mean",
        "Share of applications through MLM partners",
    ),
    (
        "SK_ID_CURR_NAME_SELLER_INDUSTRY_XNA_mean",
        "Share of applications with unspecified seller industry",
    ),
    // Goods categories
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_Medicine_mean", "Share of loans for medicine"),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_Medical_Supplies_mean", "Share of loans for medical supplies"),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_Other_mean", "Share of loans for other goods"),
    (
        "SK_ID_CURR_NAME_GOODS_CATEGORY_House_Construction_mean",
        "Share of loans for house construction",
    ),
    (
        "SK_ID_CURR_NAME_GOODS_CATEGORY_Construction_Materials_mean",
        "Share of loans for construction materials",
    ),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_Jewelry_mean", "Share of loans for jewelry"),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_AudioVideo_mean", "Share of loans for audio/video"),
    (
        "SK_ID_CURR_NAME_GOODS_CATEGORY_Photo__Cinema_Equipment_mean",
        "Share of loans for photo and cinema equipment",
    ),
    (
        "SK_ID_CURR_NAME_GOODS_CATEGORY_Consumer_Electronics_mean",
        "Share of loans for consumer electronics",
    ),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_Computers_mean", "Share of loans for computers"),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_Mobile_mean", "Share of loans for mobile phones"),
    (
        "SK_ID_CURR_NAME_GOODS_CATEGORY_Office_Appliances_mean",
        "Share of loans for office appliances",
    ),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_Homewares_mean", "Share of loans for homewares"),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_Furniture_mean", "Share of loans for furniture"),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_Gardening_mean", "Share of loans for gardening"),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_Education_mean", "Share of loans for education goods"),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_Auto_Accessories_mean", "Share of loans for auto accessories"),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_Vehicles_mean", "Share of loans for vehicles"),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_Animals_mean", "Share of loans for animals"),
    (
        "SK_ID_CURR_NAME_GOODS_CATEGORY_Clothing_and_Accessories_mean",
        "Share of loans for clothing and accessories",
    ),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_Fitness_mean", "Share of loans for fitness"),
    (
        "SK_ID_CURR_NAME_GOODS_CATEGORY_Sport_and_Leisure_mean",
        "Share of loans for sport and leisure",
    ),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_Tourism_mean", "Share of loans for tourism"),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_Insurance_mean", "Share of loans for insurance"),
    (
        "SK_ID_CURR_NAME_GOODS_CATEGORY_Additional_Service_mean",
        "Share of loans for additional services",
    ),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_Direct_Sales_mean", "Share of loans for direct sales"),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_Weapon_mean", "Share of loans for weapons"),
    ("SK_ID_CURR_NAME_GOODS_CATEGORY_XNA_mean", "Share of loans for unspecified goods"),
    // Cash loan purposes
    ("SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Car_repairs_mean", "Share of cash loans for car repairs"),
    (
        "SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Purchase_of_electronic_equipment_mean",
        "Share of cash loans for electronic equipment",
    ),
    ("SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Medicine_mean", "Share of cash loans for medicine"),
    (
        "SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Refusal_to_name_the_goal_mean",
        "Share of cash loans with an undisclosed purpose",
    ),
    ("SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_XNA_mean", "Share of cash loans with unspecified purpose"),
    ("SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_XAP_mean", "Share of cash loans with purpose coded XAP"),
    ("SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Urgent_needs_mean", "Share of cash loans for urgent needs"),
    (
        "SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Wedding__gift__holiday_mean",
        "Share of cash loans for a wedding, gift or holiday",
    ),
    (
        "SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Buying_a_garage_mean",
        "Share of cash loans for buying a garage",
    ),
    (
        "SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Buying_a_home_mean",
        "Share of cash loans for buying a home",
    ),
    (
        "SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Buying_a_used_car_mean",
        "Share of cash loans for buying a used car",
    ),
    (
        "SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Buying_a_new_car_mean",
        "Share of cash loans for buying a new car",
    ),
    (
        "SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Building_a_house_or_an_annex_mean",
        "Share of cash loans for building a house or annex",
    ),
    (
        "SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Gasification__water_supply_mean",
        "Share of cash loans for gas or water supply works",
    ),
    ("SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Repairs_mean", "Share of cash loans for repairs"),
    ("SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Hobby_mean", "Share of cash loans for hobbies"),
    ("SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Furniture_mean", "Share of cash loans for furniture"),
    (
        "SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Everyday_expenses_mean",
        "Share of cash loans for everyday expenses",
    ),
    (
        "SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Money_for_a_third_person_mean",
        "Share of cash loans for a third person",
    ),
    ("SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Other_mean", "Share of cash loans for other purposes"),
    (
        "SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Business_development_mean",
        "Share of cash loans for business development",
    ),
    ("SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Education_mean", "Share of cash loans for education"),
    (
        "SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Payments_on_other_loans_mean",
        "Share of cash loans for paying other loans",
    ),
    ("SK_ID_CURR_NAME_CASH_LOAN_PURPOSE_Journey_mean", "Share of cash loans for a journey"),
    // Application circumstances
    ("SK_ID_CURR_NAME_TYPE_SUITE_Unaccompanied_mean", "Share of unaccompanied applications"),
    ("SK_ID_CURR_NAME_TYPE_SUITE_Family_mean", "Share of applications accompanied by family"),
    (
        "SK_ID_CURR_NAME_TYPE_SUITE_Spouse_partner_mean",
        "Share of applications accompanied by a spouse or partner",
    ),
    ("SK_ID_CURR_NAME_TYPE_SUITE_Children_mean", "Share of applications accompanied by children"),
    (
        "SK_ID_CURR_NAME_TYPE_SUITE_Group_of_people_mean",
        "Share of applications accompanied by a group",
    ),
    ("SK_ID_CURR_NAME_TYPE_SUITE_Other_A_mean", "Share of applications accompanied by 'Other A'"),
    ("SK_ID_CURR_NAME_TYPE_SUITE_Other_B_mean", "Share of applications accompanied by 'Other B'"),
    (
        "SK_ID_CURR_WEEKDAY_APPR_PROCESS_START_MONDAY_mean",
        "Share of applications started on a Monday",
    ),
    (
        "SK_ID_CURR_WEEKDAY_APPR_PROCESS_START_TUESDAY_mean",
        "Share of applications started on a Tuesday",
    ),
    (
        "SK_ID_CURR_WEEKDAY_APPR_PROCESS_START_WEDNESDAY_mean",
        "Share of applications started on a Wednesday",
    ),
    (
        "SK_ID_CURR_WEEKDAY_APPR_PROCESS_START_THURSDAY_mean",
        "Share of applications started on a Thursday",
    ),
    (
        "SK_ID_CURR_WEEKDAY_APPR_PROCESS_START_FRIDAY_mean",
        "Share of applications started on a Friday",
    ),
    (
        "SK_ID_CURR_WEEKDAY_APPR_PROCESS_START_SATURDAY_mean",
        "Share of applications started on a Saturday",
    ),
    (
        "SK_ID_CURR_WEEKDAY_APPR_PROCESS_START_SUNDAY_mean",
        "Share of applications started on a Sunday",
    ),
];

/// Immutable feature name to label mapping.
#[derive(Debug, Clone)]
pub struct Glossary {
    labels: HashMap<&'static str, &'static str>,
}

impl Glossary {
    /// Builds the glossary from the built-in entries.
    pub fn builtin() -> Self {
        Self {
            labels: ENTRIES.iter().copied().collect(),
        }
    }

    /// Label of a feature, falling back to its raw name.
    pub fn label<'a>(&self, feature: &'a str) -> &'a str {
        self.labels.get(feature).copied().unwrap_or(feature)
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.labels.contains_key(feature)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for Glossary {
    fn default() -> Self {
        Self::builtin()
    }
}

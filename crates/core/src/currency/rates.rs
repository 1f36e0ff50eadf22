//! Built-in exchange rates.
//!
//! Units of foreign currency per 1 USD. Several labels share a code
//! (XOF, XAF, ILS, ZAR) and keep their own rates.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default rate list, in table order.
pub const BUILTIN_RATES: &[(&str, Decimal)] = &[
    // Middle East
    ("Afghanistan (AFN)", dec!(71.00)),
    ("Armenia (AMD)", dec!(391.14)),
    ("Bahrain (BHD)", dec!(0.38)),
    ("Cyprus (EUR)", dec!(0.92)),
    ("Egypt (EGP)", dec!(51.39)),
    ("Georgia (GEL)", dec!(2.75)),
    ("Iran (IRR)", dec!(42100.00)),
    ("Iraq (IQD)", dec!(1309.96)),
    ("Israel (ILS)", dec!(3.78)),
    ("Jordan (JOD)", dec!(0.71)),
    ("Kuwait (KWD)", dec!(0.31)),
    ("Lebanon (LBP)", dec!(90798.48)),
    ("Oman (OMR)", dec!(0.38)),
    ("Palestine (ILS)", dec!(3.78)),
    ("Qatar (QAR)", dec!(3.64)),
    ("Saudi Arabia (SAR)", dec!(3.75)),
    ("Syria (SYP)", dec!(13001.81)),
    ("Turkey (TRY)", dec!(38.01)),
    ("United Arab Emirates (AED)", dec!(3.67)),
    ("Yemen (YER)", dec!(245.65)),
    // Africa
    ("Algeria (DZD)", dec!(133.41)),
    ("Angola (AOA)", dec!(916.00)),
    ("Benin (XOF)", dec!(599.58)),
    ("Botswana (BWP)", dec!(14.09)),
    ("Burkina Faso (XOF)", dec!(597.84)),
    ("Burundi (BIF)", dec!(2976.63)),
    ("Cabo Verde (CVE)", dec!(100.38)),
    ("Cameroon (XAF)", dec!(599.57)),
    ("Central African Republic (XAF)", dec!(599.57)),
    ("Chad (XAF)", dec!(599.57)),
    ("Comoros (KMF)", dec!(448.02)),
    ("Democratic Republic of the Congo (CDF)", dec!(2906.33)),
    ("Republic of the Congo (XAF)", dec!(2871.00)),
    ("Djibouti (DJF)", dec!(178.38)),
    ("Equatorial Guinea (XAF)", dec!(8657.72)),
    ("Eritrea (ERN)", dec!(15.00)),
    ("Eswatini (ZAR)", dec!(19.54)),
    ("Ethiopia (ETB)", dec!(132.60)),
    ("Gabon (XAF)", dec!(599.57)),
    ("Gambia (GMD)", dec!(71.50)),
    ("Ghana (GHS)", dec!(15.53)),
    ("Guinea (GNF)", dec!(8667.85)),
    ("Guinea-Bissau (XOF)", dec!(8650.41)),
    ("Ivory Coast (XOF)", dec!(598.34)),
    ("Kenya (KES)", dec!(129.71)),
    ("Lesotho (LSL)", dec!(19.40)),
    ("Liberia (LRD)", dec!(199.49)),
    ("Libya (LYD)", dec!(5.56)),
    ("Madagascar (MGA)", dec!(4675.33)),
    ("Malawi (MWK)", dec!(1736.96)),
    ("Mali (XOF)", dec!(598.34)),
    ("Mauritania (MRU)", dec!(39.70)),
    ("Mauritius (MUR)", dec!(45.12)),
    ("Morocco (MAD)", dec!(9.54)),
    ("Mozambique (MZN)", dec!(63.90)),
    ("Namibia (NAD)", dec!(18.72)),
    ("Niger (XOF)", dec!(1546.27)),
    ("Nigeria (NGN)", dec!(1566.00)),
    ("Rwanda (RWF)", dec!(1412.25)),
    ("São Tomé and Príncipe (STN)", dec!(22281.80)),
    ("Senegal (XOF)", dec!(598.34)),
    ("Seychelles (SCR)", dec!(14.29)),
    ("Sierra Leone (SLL)", dec!(22639.50)),
    ("Somalia (SOS)", dec!(572.25)),
    ("South Africa (ZAR)", dec!(19.50)),
    ("South Sudan (SSP)", dec!(130.26)),
    ("Sudan (SDG)", dec!(600.50)),
    ("Tanzania (TZS)", dec!(2691.72)),
    ("Togo (XOF)", dec!(598.35)),
    ("Tunisia (TND)", dec!(3.07)),
    ("Uganda (UGX)", dec!(3722.90)),
    ("Zambia (ZMW)", dec!(28.02)),
    ("Zimbabwe (ZWL)", dec!(322.00)),
];

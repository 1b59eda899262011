//! The static Virginia jurisdiction table: 95 counties and 38 independent
//! cities, in the order the generator processes them.
//!
//! Bounding boxes are `[west, south, east, north]` in degrees.

use crate::jurisdiction::{BBox, Jurisdiction, JurisdictionKind};

const fn county(id: &'static str, name: &'static str, fips: &'static str, bbox: [f64; 4]) -> Jurisdiction {
    Jurisdiction { id, name, kind: JurisdictionKind::County, fips, bbox: BBox::from_array(bbox) }
}

const fn city(id: &'static str, name: &'static str, fips: &'static str, bbox: [f64; 4]) -> Jurisdiction {
    Jurisdiction { id, name, kind: JurisdictionKind::City, fips, bbox: BBox::from_array(bbox) }
}

/// Number of entries in [`JURISDICTIONS`].
pub const JURISDICTION_COUNT: usize = 133;

/// Every jurisdiction, counties first (alphabetical), then cities.
pub static JURISDICTIONS: [Jurisdiction; JURISDICTION_COUNT] = [
    // ── Counties (95) ─────────────────────────────────────────────────────────
    county("accomack", "Accomack County", "001", [-76.0533, 37.2918, -75.2429, 38.0274]),
    county("albemarle", "Albemarle County", "003", [-78.8399, 37.7273, -78.2637, 38.3034]),
    county("alleghany", "Alleghany County", "005", [-80.2213, 37.5672, -79.6473, 38.0134]),
    county("amelia", "Amelia County", "007", [-78.1777, 37.1458, -77.6553, 37.4678]),
    county("amherst", "Amherst County", "009", [-79.4745, 37.3962, -78.8591, 37.806]),
    county("appomattox", "Appomattox County", "011", [-79.0929, 37.2061, -78.5716, 37.5494]),
    county("arlington", "Arlington County", "013", [-77.1722, 38.8275, -77.032, 38.9341]),
    county("augusta", "Augusta County", "015", [-79.5431, 37.8873, -78.8617, 38.4767]),
    county("bath", "Bath County", "017", [-80.0564, 37.8573, -79.4479, 38.3947]),
    county("bedford_county", "Bedford County", "019", [-79.7888, 37.0341, -79.2507, 37.513]),
    county("bland", "Bland County", "021", [-81.3447, 36.9649, -80.8546, 37.2462]),
    county("botetourt", "Botetourt County", "023", [-80.074, 37.2847, -79.498, 37.8013]),
    county("brunswick", "Brunswick County", "025", [-78.0036, 36.5438, -77.6547, 37.0218]),
    county("buchanan", "Buchanan County", "027", [-82.3147, 37.0072, -81.7389, 37.5068]),
    county("buckingham", "Buckingham County", "029", [-78.8687, 37.3307, -78.2399, 37.7899]),
    county("campbell", "Campbell County", "031", [-79.4414, 37.0077, -78.8217, 37.4283]),
    county("caroline", "Caroline County", "033", [-77.6434, 37.7881, -77.0312, 38.3047]),
    county("carroll", "Carroll County", "035", [-80.9614, 36.5509, -80.4605, 36.9522]),
    county("charles_city", "Charles City County", "036", [-77.2495, 37.2423, -76.854, 37.4893]),
    county("charlotte", "Charlotte County", "037", [-78.9045, 36.7897, -78.3936, 37.2263]),
    county("chesterfield", "Chesterfield County", "041", [-77.8574, 37.1466, -77.3884, 37.5576]),
    county("clarke", "Clarke County", "043", [-78.1322, 39.0067, -77.8228, 39.2255]),
    county("craig", "Craig County", "045", [-80.4642, 37.2579, -79.9612, 37.6582]),
    county("culpeper", "Culpeper County", "047", [-78.2318, 38.2676, -77.6279, 38.7183]),
    county("cumberland", "Cumberland County", "049", [-78.4626, 37.3363, -78.0246, 37.6858]),
    county("dickenson", "Dickenson County", "051", [-82.5652, 37.0014, -82.0959, 37.2964]),
    county("dinwiddie", "Dinwiddie County", "053", [-77.9005, 36.8499, -77.3989, 37.3384]),
    county("essex", "Essex County", "057", [-77.1683, 37.7905, -76.6647, 38.1196]),
    county("fairfax", "Fairfax County", "059", [-77.5116, 38.5958, -77.0285, 39.0007]),
    county("fauquier", "Fauquier County", "061", [-78.0938, 38.4617, -77.5319, 38.9658]),
    county("floyd", "Floyd County", "063", [-80.5925, 36.7478, -80.0815, 37.0775]),
    county("fluvanna", "Fluvanna County", "065", [-78.5136, 37.6845, -78.0669, 38.0218]),
    county("franklin_county", "Franklin County", "067", [-80.1616, 36.7148, -79.5909, 37.2254]),
    county("frederick", "Frederick County", "069", [-78.5085, 39.0206, -78.0035, 39.3999]),
    county("giles", "Giles County", "071", [-80.9141, 37.1183, -80.4357, 37.5119]),
    county("gloucester", "Gloucester County", "073", [-76.7463, 37.2188, -76.2868, 37.5724]),
    county("goochland", "Goochland County", "075", [-78.1553, 37.5408, -77.6556, 37.8954]),
    county("grayson", "Grayson County", "077", [-81.5347, 36.5052, -80.9005, 36.8514]),
    county("greene", "Greene County", "079", [-78.6612, 38.1768, -78.2848, 38.4378]),
    county("greensville", "Greensville County", "081", [-77.7674, 36.5429, -77.2977, 36.8753]),
    county("halifax", "Halifax County", "083", [-79.2508, 36.5414, -78.6494, 37.0303]),
    county("hanover", "Hanover County", "085", [-77.7014, 37.5378, -77.1905, 38.0153]),
    county("henrico", "Henrico County", "087", [-77.6604, 37.3862, -77.1462, 37.7234]),
    county("henry", "Henry County", "089", [-80.0933, 36.5413, -79.6401, 36.8533]),
    county("highland", "Highland County", "091", [-79.8512, 38.1312, -79.2263, 38.5941]),
    county("isle_of_wight", "Isle of Wight County", "093", [-76.9259, 36.7127, -76.4226, 37.0703]),
    county("james_city", "James City County", "095", [-76.9275, 37.1767, -76.5866, 37.4387]),
    county("king_and_queen", "King and Queen County", "097", [-77.1485, 37.5269, -76.609, 37.9212]),
    county("king_george", "King George County", "099", [-77.3273, 38.1263, -76.9889, 38.4341]),
    county("king_william", "King William County", "101", [-77.3055, 37.5041, -76.8221, 37.8945]),
    county("lancaster", "Lancaster County", "103", [-76.6168, 37.5731, -76.2605, 37.8907]),
    county("lee", "Lee County", "105", [-83.4724, 36.5007, -82.8487, 36.9299]),
    county("loudoun", "Loudoun County", "107", [-77.9623, 38.8426, -77.3243, 39.3222]),
    county("louisa", "Louisa County", "109", [-78.2065, 37.8116, -77.6577, 38.2206]),
    county("lunenburg", "Lunenburg County", "111", [-78.5038, 36.7645, -78.0033, 37.1458]),
    county("madison", "Madison County", "113", [-78.4847, 38.2174, -78.0909, 38.5894]),
    county("mathews", "Mathews County", "115", [-76.4639, 37.2954, -76.1497, 37.5502]),
    county("mecklenburg", "Mecklenburg County", "117", [-78.6494, 36.5006, -78.0033, 36.9117]),
    county("middlesex", "Middlesex County", "119", [-76.7389, 37.4472, -76.2873, 37.7677]),
    county("montgomery", "Montgomery County", "121", [-80.6632, 36.9993, -80.1539, 37.3817]),
    county("nelson", "Nelson County", "125", [-79.1728, 37.5545, -78.6451, 38.0228]),
    county("new_kent", "New Kent County", "127", [-77.1857, 37.3514, -76.7696, 37.6717]),
    county("northampton", "Northampton County", "131", [-76.1329, 37.0697, -75.7194, 37.545]),
    county("northumberland", "Northumberland County", "133", [-76.5634, 37.7178, -76.1963, 38.0285]),
    county("nottoway", "Nottoway County", "135", [-78.2688, 36.9648, -77.8278, 37.3186]),
    county("orange", "Orange County", "137", [-78.3412, 38.0287, -77.7055, 38.4658]),
    county("page", "Page County", "139", [-78.6693, 38.4148, -78.2848, 38.8201]),
    county("patrick", "Patrick County", "141", [-80.5466, 36.5043, -80.0225, 36.8608]),
    county("pittsylvania", "Pittsylvania County", "143", [-79.7159, 36.5416, -79.0408, 37.1417]),
    county("powhatan", "Powhatan County", "145", [-78.1055, 37.3887, -77.6556, 37.6776]),
    county("prince_edward", "Prince Edward County", "147", [-78.6831, 37.0196, -78.1987, 37.4179]),
    county("prince_george", "Prince George County", "149", [-77.4461, 37.0065, -76.9276, 37.3594]),
    county("prince_william", "Prince William County", "153", [-77.7192, 38.5119, -77.2441, 38.8927]),
    county("pulaski", "Pulaski County", "155", [-80.9141, 36.9137, -80.4692, 37.2082]),
    county("rappahannock", "Rappahannock County", "157", [-78.3993, 38.4943, -78.0035, 38.8816]),
    county("richmond_county", "Richmond County", "159", [-76.9387, 37.8177, -76.5258, 38.0669]),
    county("roanoke_county", "Roanoke County", "161", [-80.2627, 37.1064, -79.8438, 37.4234]),
    county("rockbridge", "Rockbridge County", "163", [-79.8017, 37.5278, -79.0777, 38.0479]),
    county("rockingham", "Rockingham County", "165", [-79.2263, 38.1917, -78.5423, 38.8248]),
    county("russell", "Russell County", "167", [-82.3325, 36.7541, -81.8485, 37.1189]),
    county("scott", "Scott County", "169", [-82.9002, 36.5935, -82.3147, 36.8755]),
    county("shenandoah", "Shenandoah County", "171", [-78.8234, 38.6141, -78.3135, 39.1133]),
    county("smyth", "Smyth County", "173", [-81.8485, 36.7024, -81.2612, 37.0093]),
    county("southampton", "Southampton County", "175", [-77.4291, 36.5444, -76.7608, 36.9481]),
    county("spotsylvania", "Spotsylvania County", "177", [-77.8547, 37.9859, -77.3694, 38.4034]),
    county("stafford", "Stafford County", "179", [-77.6573, 38.2574, -77.2435, 38.6134]),
    county("surry", "Surry County", "181", [-77.1149, 36.9476, -76.5866, 37.3067]),
    county("sussex", "Sussex County", "183", [-77.5068, 36.6997, -76.9276, 37.1426]),
    county("tazewell", "Tazewell County", "185", [-81.8485, 36.9538, -81.2245, 37.3185]),
    county("warren", "Warren County", "187", [-78.3949, 38.7581, -78.0035, 39.0626]),
    county("washington", "Washington County", "191", [-82.3147, 36.5413, -81.6469, 36.9311]),
    county("westmoreland", "Westmoreland County", "193", [-77.0312, 37.9657, -76.5147, 38.2749]),
    county("wise", "Wise County", "195", [-82.9005, 36.8755, -82.3147, 37.1189]),
    county("wythe", "Wythe County", "197", [-81.3447, 36.7541, -80.8546, 37.0872]),
    county("york", "York County", "199", [-76.7521, 37.0891, -76.3845, 37.4133]),

    // ── Independent cities (38) ───────────────────────────────────────────────
    city("alexandria", "Alexandria City", "510", [-77.1441, 38.7852, -77.0268, 38.8452]),
    city("bristol", "Bristol City", "520", [-82.2162, 36.5755, -82.1126, 36.6447]),
    city("buena_vista", "Buena Vista City", "530", [-79.3905, 37.7047, -79.3158, 37.7654]),
    city("charlottesville", "Charlottesville City", "540", [-78.5234, 37.9966, -78.4429, 38.0653]),
    city("chesapeake", "Chesapeake City", "550", [-76.4912, 36.5499, -76.0553, 36.9228]),
    city("colonial_heights", "Colonial Heights City", "570", [-77.4275, 37.2259, -77.3627, 37.2883]),
    city("covington", "Covington City", "580", [-80.0186, 37.7686, -79.9661, 37.8122]),
    city("danville", "Danville City", "590", [-79.4914, 36.5423, -79.2996, 36.6479]),
    city("emporia", "Emporia City", "595", [-77.5734, 36.6657, -77.5066, 36.7142]),
    city("fairfax_city", "Fairfax City", "600", [-77.3413, 38.8305, -77.2765, 38.8692]),
    city("falls_church", "Falls Church City", "610", [-77.1952, 38.8608, -77.1519, 38.8942]),
    city("franklin_city", "Franklin City", "620", [-76.9668, 36.6595, -76.9067, 36.6993]),
    city("fredericksburg", "Fredericksburg City", "630", [-77.5054, 38.2703, -77.4244, 38.3385]),
    city("galax", "Galax City", "640", [-80.9558, 36.6323, -80.8858, 36.6877]),
    city("hampton", "Hampton City", "650", [-76.4912, 36.9657, -76.2489, 37.1329]),
    city("harrisonburg", "Harrisonburg City", "660", [-78.9148, 38.4086, -78.8317, 38.4895]),
    city("hopewell", "Hopewell City", "670", [-77.3278, 37.2652, -77.2576, 37.3337]),
    city("lexington", "Lexington City", "678", [-79.4615, 37.7656, -79.4224, 37.7993]),
    city("lynchburg", "Lynchburg City", "680", [-79.2532, 37.3435, -79.0476, 37.4741]),
    city("manassas", "Manassas City", "683", [-77.5127, 38.7226, -77.4416, 38.7793]),
    city("manassas_park", "Manassas Park City", "685", [-77.4632, 38.7545, -77.4234, 38.7855]),
    city("martinsville", "Martinsville City", "690", [-79.9096, 36.6611, -79.8322, 36.7189]),
    city("newport_news", "Newport News City", "700", [-76.6636, 36.9604, -76.3845, 37.2352]),
    city("norfolk", "Norfolk City", "710", [-76.3845, 36.7958, -76.1902, 36.9446]),
    city("norton", "Norton City", "720", [-82.6667, 36.9078, -82.6001, 36.9522]),
    city("petersburg", "Petersburg City", "730", [-77.4536, 37.1783, -77.3473, 37.2449]),
    city("poquoson", "Poquoson City", "735", [-76.4137, 37.0891, -76.2868, 37.1717]),
    city("portsmouth", "Portsmouth City", "740", [-76.4331, 36.7717, -76.2868, 36.9054]),
    city("radford", "Radford City", "750", [-80.6017, 37.1041, -80.5177, 37.1561]),
    city("richmond_city", "Richmond City", "760", [-77.5744, 37.4465, -77.3852, 37.5987]),
    city("roanoke_city", "Roanoke City", "770", [-80.0186, 37.2198, -79.8733, 37.3234]),
    city("salem", "Salem City", "775", [-80.1006, 37.2585, -79.9962, 37.3227]),
    city("staunton", "Staunton City", "790", [-79.1186, 38.1196, -79.0247, 38.1804]),
    city("suffolk", "Suffolk City", "800", [-76.8861, 36.5501, -76.3845, 36.9446]),
    city("virginia_beach", "Virginia Beach City", "810", [-76.1902, 36.5504, -75.8631, 36.9336]),
    city("waynesboro", "Waynesboro City", "820", [-78.9269, 38.0409, -78.8614, 38.0991]),
    city("williamsburg", "Williamsburg City", "830", [-76.7421, 37.2498, -76.683, 37.2972]),
    city("winchester", "Winchester City", "840", [-78.2074, 39.1383, -78.1252, 39.213]),
];

// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{countrydata::RawCountry, macros::raw_country};

/// Sovereign countries, sorted by English name.
///
/// Row layout: name, regions, iso2, dial code, mask, priority (only when more
/// than one country shares a dial code), area codes.
pub static RAW_COUNTRIES: &[RawCountry] = &[
    raw_country!("Afghanistan", [Asia], "af", "93"),
    raw_country!("Albania", [Europe], "al", "355"),
    raw_country!("Algeria", [Africa, NorthAfrica], "dz", "213"),
    raw_country!("Andorra", [Europe], "ad", "376"),
    raw_country!("Angola", [Africa], "ao", "244"),
    raw_country!("Antigua and Barbuda", [America, Caribbean], "ag", "1268"),
    raw_country!("Argentina", [America, SouthAmerica], "ar", "54", Some("(..) ........"), 0, [
        "11", "221", "223", "261", "264", "2652", "280", "2905", "291", "2920", "2966", "299",
        "341", "342", "343", "351", "376", "379", "381", "3833", "385", "387", "388",
    ]),
    raw_country!("Armenia", [Asia, ExUssr], "am", "374", Some(".. ......")),
    raw_country!("Aruba", [America, Caribbean], "aw", "297"),
    raw_country!("Australia", [Oceania], "au", "61", Some("(..) .... ...."), 0, [
        "2", "3", "4", "7", "8", "02", "03", "04", "07", "08",
    ]),
    raw_country!("Austria", [Europe, EuUnion], "at", "43"),
    raw_country!("Azerbaijan", [Asia, ExUssr], "az", "994", Some("(..) ... .. ..")),
    raw_country!("Bahamas", [America, Caribbean], "bs", "1242"),
    raw_country!("Bahrain", [MiddleEast], "bh", "973"),
    raw_country!("Bangladesh", [Asia], "bd", "880"),
    raw_country!("Barbados", [America, Caribbean], "bb", "1246"),
    raw_country!("Belarus", [Europe, ExUssr], "by", "375", Some("(..) ... .. ..")),
    raw_country!("Belgium", [Europe, EuUnion], "be", "32", Some("... .. .. ..")),
    raw_country!("Belize", [America, CentralAmerica], "bz", "501"),
    raw_country!("Benin", [Africa], "bj", "229"),
    raw_country!("Bhutan", [Asia], "bt", "975"),
    raw_country!("Bolivia", [America, SouthAmerica], "bo", "591"),
    raw_country!("Bosnia and Herzegovina", [Europe, ExYugos], "ba", "387"),
    raw_country!("Botswana", [Africa], "bw", "267"),
    raw_country!("Brazil", [America, SouthAmerica], "br", "55", Some("(..) ........")),
    raw_country!("British Indian Ocean Territory", [Asia], "io", "246"),
    raw_country!("Brunei", [Asia], "bn", "673"),
    raw_country!("Bulgaria", [Europe, EuUnion], "bg", "359"),
    raw_country!("Burkina Faso", [Africa], "bf", "226"),
    raw_country!("Burundi", [Africa], "bi", "257"),
    raw_country!("Cambodia", [Asia], "kh", "855"),
    raw_country!("Cameroon", [Africa], "cm", "237"),
    raw_country!("Canada", [America, NorthAmerica], "ca", "1", Some("(...) ...-...."), 1, [
        "204", "226", "236", "249", "250", "289", "306", "343", "365", "387", "403", "416",
        "418", "431", "437", "438", "450", "506", "514", "519", "548", "579", "581", "587",
        "604", "613", "639", "647", "672", "705", "709", "742", "778", "780", "782", "807",
        "819", "825", "867", "873", "902", "905",
    ]),
    raw_country!("Cape Verde", [Africa], "cv", "238"),
    raw_country!("Caribbean Netherlands", [America, Caribbean], "bq", "599", None, 1),
    raw_country!("Central African Republic", [Africa], "cf", "236"),
    raw_country!("Chad", [Africa], "td", "235"),
    raw_country!("Chile", [America, SouthAmerica], "cl", "56"),
    raw_country!("China", [Asia], "cn", "86", Some("..-.........")),
    raw_country!("Colombia", [America, SouthAmerica], "co", "57", Some("... ... ....")),
    raw_country!("Comoros", [Africa], "km", "269"),
    raw_country!("Congo", [Africa], "cd", "243"),
    raw_country!("Congo", [Africa], "cg", "242"),
    raw_country!("Costa Rica", [America, CentralAmerica], "cr", "506", Some("....-....")),
    raw_country!("Côte d’Ivoire", [Africa], "ci", "225", Some(".. .. .. ..")),
    raw_country!("Croatia", [Europe, EuUnion, ExYugos], "hr", "385"),
    raw_country!("Cuba", [America, Caribbean], "cu", "53"),
    raw_country!("Curaçao", [America, Caribbean], "cw", "599", None, 0),
    raw_country!("Cyprus", [Europe, EuUnion], "cy", "357", Some(".. ......")),
    raw_country!("Czech Republic", [Europe, EuUnion], "cz", "420", Some("... ... ...")),
    raw_country!("Denmark", [Europe, EuUnion, Baltic], "dk", "45", Some(".. .. .. ..")),
    raw_country!("Djibouti", [Africa], "dj", "253"),
    raw_country!("Dominica", [America, Caribbean], "dm", "1767"),
    raw_country!("Dominican Republic", [America, Caribbean], "do", "1", None, 2, [
        "809", "829", "849",
    ]),
    raw_country!("Ecuador", [America, SouthAmerica], "ec", "593"),
    raw_country!("Egypt", [Africa, NorthAfrica], "eg", "20"),
    raw_country!("El Salvador", [America, CentralAmerica], "sv", "503", Some("....-....")),
    raw_country!("Equatorial Guinea", [Africa], "gq", "240"),
    raw_country!("Eritrea", [Africa], "er", "291"),
    raw_country!("Estonia", [Europe, EuUnion, ExUssr, Baltic], "ee", "372", Some(".... ......")),
    raw_country!("Ethiopia", [Africa], "et", "251"),
    raw_country!("Fiji", [Oceania], "fj", "679"),
    raw_country!("Finland", [Europe, EuUnion, Baltic], "fi", "358", Some(".. ... .. ..")),
    raw_country!("France", [Europe, EuUnion], "fr", "33", Some(". .. .. .. ..")),
    raw_country!("French Guiana", [America, SouthAmerica], "gf", "594"),
    raw_country!("French Polynesia", [Oceania], "pf", "689"),
    raw_country!("Gabon", [Africa], "ga", "241"),
    raw_country!("Gambia", [Africa], "gm", "220"),
    raw_country!("Georgia", [Asia, ExUssr], "ge", "995"),
    raw_country!("Germany", [Europe, EuUnion, Baltic], "de", "49", Some(".... ........")),
    raw_country!("Ghana", [Africa], "gh", "233"),
    raw_country!("Greece", [Europe, EuUnion], "gr", "30"),
    raw_country!("Grenada", [America, Caribbean], "gd", "1473"),
    raw_country!("Guadeloupe", [America, Caribbean], "gp", "590", None, 0),
    raw_country!("Guam", [Oceania], "gu", "1671"),
    raw_country!("Guatemala", [America, CentralAmerica], "gt", "502", Some("....-....")),
    raw_country!("Guinea", [Africa], "gn", "224"),
    raw_country!("Guinea-Bissau", [Africa], "gw", "245"),
    raw_country!("Guyana", [America, SouthAmerica], "gy", "592"),
    raw_country!("Haiti", [America, Caribbean], "ht", "509", Some("....-....")),
    raw_country!("Honduras", [America, CentralAmerica], "hn", "504"),
    raw_country!("Hong Kong", [Asia], "hk", "852", Some(".... ....")),
    raw_country!("Hungary", [Europe, EuUnion], "hu", "36"),
    raw_country!("Iceland", [Europe], "is", "354", Some("... ....")),
    raw_country!("India", [Asia], "in", "91", Some(".....-.....")),
    raw_country!("Indonesia", [Asia], "id", "62"),
    raw_country!("Iran", [MiddleEast], "ir", "98", Some("... ... ....")),
    raw_country!("Iraq", [MiddleEast], "iq", "964"),
    raw_country!("Ireland", [Europe, EuUnion], "ie", "353", Some(".. .......")),
    raw_country!("Israel", [MiddleEast], "il", "972", Some("... ... ....")),
    raw_country!("Italy", [Europe, EuUnion], "it", "39", Some("... ......."), 0),
    raw_country!("Jamaica", [America, Caribbean], "jm", "1876"),
    raw_country!("Japan", [Asia], "jp", "81", Some(".. .... ....")),
    raw_country!("Jordan", [MiddleEast], "jo", "962"),
    raw_country!("Kazakhstan", [Asia, ExUssr], "kz", "7", Some("... ...-..-.."), 1, [
        "310", "311", "312", "313", "315", "318", "321", "324", "325", "326", "327", "336",
        "7172", "73622",
    ]),
    raw_country!("Kenya", [Africa], "ke", "254"),
    raw_country!("Kiribati", [Oceania], "ki", "686"),
    raw_country!("Kosovo", [Europe, ExYugos], "xk", "383"),
    raw_country!("Kuwait", [MiddleEast], "kw", "965"),
    raw_country!("Kyrgyzstan", [Asia, ExUssr], "kg", "996", Some("... ... ...")),
    raw_country!("Laos", [Asia], "la", "856"),
    raw_country!("Latvia", [Europe, EuUnion, ExUssr, Baltic], "lv", "371", Some(".. ... ...")),
    raw_country!("Lebanon", [MiddleEast], "lb", "961"),
    raw_country!("Lesotho", [Africa], "ls", "266"),
    raw_country!("Liberia", [Africa], "lr", "231"),
    raw_country!("Libya", [Africa, NorthAfrica], "ly", "218"),
    raw_country!("Liechtenstein", [Europe], "li", "423"),
    raw_country!("Lithuania", [Europe, EuUnion, ExUssr, Baltic], "lt", "370"),
    raw_country!("Luxembourg", [Europe, EuUnion], "lu", "352"),
    raw_country!("Macau", [Asia], "mo", "853"),
    raw_country!("Macedonia", [Europe, ExYugos], "mk", "389"),
    raw_country!("Madagascar", [Africa], "mg", "261"),
    raw_country!("Malawi", [Africa], "mw", "265"),
    raw_country!("Malaysia", [Asia], "my", "60", Some("..-....-....")),
    raw_country!("Maldives", [Asia], "mv", "960"),
    raw_country!("Mali", [Africa], "ml", "223"),
    raw_country!("Malta", [Europe, EuUnion], "mt", "356"),
    raw_country!("Marshall Islands", [Oceania], "mh", "692"),
    raw_country!("Martinique", [America, Caribbean], "mq", "596"),
    raw_country!("Mauritania", [Africa], "mr", "222"),
    raw_country!("Mauritius", [Africa], "mu", "230"),
    raw_country!("Mexico", [America, CentralAmerica], "mx", "52", Some("... ... ...."), 0, [
        "55", "81", "33", "656", "664", "998", "774", "229",
    ]),
    raw_country!("Micronesia", [Oceania], "fm", "691"),
    raw_country!("Moldova", [Europe], "md", "373", Some("(..) ..-..-..")),
    raw_country!("Monaco", [Europe], "mc", "377"),
    raw_country!("Mongolia", [Asia], "mn", "976"),
    raw_country!("Montenegro", [Europe, ExYugos], "me", "382"),
    raw_country!("Morocco", [Africa, NorthAfrica], "ma", "212"),
    raw_country!("Mozambique", [Africa], "mz", "258"),
    raw_country!("Myanmar", [Asia], "mm", "95"),
    raw_country!("Namibia", [Africa], "na", "264"),
    raw_country!("Nauru", [Africa], "nr", "674"),
    raw_country!("Nepal", [Asia], "np", "977"),
    raw_country!("Netherlands", [Europe, EuUnion], "nl", "31", Some(".. ........")),
    raw_country!("New Caledonia", [Oceania], "nc", "687"),
    raw_country!("New Zealand", [Oceania], "nz", "64", Some("...-...-....")),
    raw_country!("Nicaragua", [America, CentralAmerica], "ni", "505"),
    raw_country!("Niger", [Africa], "ne", "227"),
    raw_country!("Nigeria", [Africa], "ng", "234"),
    raw_country!("North Korea", [Asia], "kp", "850"),
    raw_country!("Norway", [Europe, Baltic], "no", "47", Some("... .. ...")),
    raw_country!("Oman", [MiddleEast], "om", "968"),
    raw_country!("Pakistan", [Asia], "pk", "92", Some("...-.......")),
    raw_country!("Palau", [Oceania], "pw", "680"),
    raw_country!("Palestine", [MiddleEast], "ps", "970"),
    raw_country!("Panama", [America, CentralAmerica], "pa", "507"),
    raw_country!("Papua New Guinea", [Oceania], "pg", "675"),
    raw_country!("Paraguay", [America, SouthAmerica], "py", "595"),
    raw_country!("Peru", [America, SouthAmerica], "pe", "51"),
    raw_country!("Philippines", [Asia], "ph", "63", Some(".... .......")),
    raw_country!("Poland", [Europe, EuUnion, Baltic], "pl", "48", Some("...-...-...")),
    raw_country!("Portugal", [Europe, EuUnion], "pt", "351"),
    raw_country!("Puerto Rico", [America, Caribbean], "pr", "1", None, 3, ["787", "939"]),
    raw_country!("Qatar", [MiddleEast], "qa", "974"),
    raw_country!("Réunion", [Africa], "re", "262"),
    raw_country!("Romania", [Europe, EuUnion], "ro", "40"),
    raw_country!("Russia", [Europe, Asia, ExUssr, Baltic], "ru", "7", Some("(...) ...-..-.."), 0),
    raw_country!("Rwanda", [Africa], "rw", "250"),
    raw_country!("Saint Kitts and Nevis", [America, Caribbean], "kn", "1869"),
    raw_country!("Saint Lucia", [America, Caribbean], "lc", "1758"),
    raw_country!("Saint Vincent and the Grenadines", [America, Caribbean], "vc", "1784"),
    raw_country!("Samoa", [Oceania], "ws", "685"),
    raw_country!("San Marino", [Europe], "sm", "378"),
    raw_country!("São Tomé and Príncipe", [Africa], "st", "239"),
    raw_country!("Saudi Arabia", [MiddleEast], "sa", "966"),
    raw_country!("Senegal", [Africa], "sn", "221"),
    raw_country!("Serbia", [Europe, ExYugos], "rs", "381"),
    raw_country!("Seychelles", [Africa], "sc", "248"),
    raw_country!("Sierra Leone", [Africa], "sl", "232"),
    raw_country!("Singapore", [Asia], "sg", "65", Some("....-....")),
    raw_country!("Slovakia", [Europe, EuUnion], "sk", "421"),
    raw_country!("Slovenia", [Europe, EuUnion, ExYugos], "si", "386"),
    raw_country!("Solomon Islands", [Oceania], "sb", "677"),
    raw_country!("Somalia", [Africa], "so", "252"),
    raw_country!("South Africa", [Africa], "za", "27"),
    raw_country!("South Korea", [Asia], "kr", "82", Some("... .... ....")),
    raw_country!("South Sudan", [Africa, NorthAfrica], "ss", "211"),
    raw_country!("Spain", [Europe, EuUnion], "es", "34", Some("... ... ...")),
    raw_country!("Sri Lanka", [Asia], "lk", "94"),
    raw_country!("Sudan", [Africa], "sd", "249"),
    raw_country!("Suriname", [America, SouthAmerica], "sr", "597"),
    raw_country!("Swaziland", [Africa], "sz", "268"),
    raw_country!("Sweden", [Europe, EuUnion, Baltic], "se", "46", Some("(...) ...-...")),
    raw_country!("Switzerland", [Europe], "ch", "41", Some(".. ... .. ..")),
    raw_country!("Syria", [MiddleEast], "sy", "963"),
    raw_country!("Taiwan", [Asia], "tw", "886"),
    raw_country!("Tajikistan", [Asia, ExUssr], "tj", "992"),
    raw_country!("Tanzania", [Africa], "tz", "255"),
    raw_country!("Thailand", [Asia], "th", "66"),
    raw_country!("Timor-Leste", [Asia], "tl", "670"),
    raw_country!("Togo", [Africa], "tg", "228"),
    raw_country!("Tonga", [Oceania], "to", "676"),
    raw_country!("Trinidad and Tobago", [America, Caribbean], "tt", "1868"),
    raw_country!("Tunisia", [Africa, NorthAfrica], "tn", "216"),
    raw_country!("Turkey", [Europe], "tr", "90", Some("... ... .. ..")),
    raw_country!("Turkmenistan", [Asia, ExUssr], "tm", "993"),
    raw_country!("Tuvalu", [Asia], "tv", "688"),
    raw_country!("Uganda", [Africa], "ug", "256"),
    raw_country!("Ukraine", [Europe, ExUssr], "ua", "380", Some("(..) ... .. ..")),
    raw_country!("United Arab Emirates", [MiddleEast], "ae", "971"),
    raw_country!("United Kingdom", [Europe, EuUnion], "gb", "44", Some(".... ......"), 0),
    raw_country!("United States", [America, NorthAmerica], "us", "1", Some("(...) ...-...."), 0, [
        "907", "205", "251", "256", "334", "479", "501", "870", "480", "520", "602", "623",
        "928", "209", "213", "310", "323", "408", "415", "510", "530", "559", "562", "619",
        "626", "650", "661", "707", "714", "760", "805", "818", "831", "858", "909", "916",
        "925", "949", "951", "303", "719", "970", "203", "860", "202", "302", "239", "305",
        "321", "352", "386", "407", "561", "727", "772", "813", "850", "863", "904", "941",
        "954", "229", "404", "478", "706", "770", "912", "808", "319", "515", "563", "641",
        "712", "208", "217", "309", "312", "618", "630", "708", "773", "815", "847", "219",
        "260", "317", "574", "765", "812", "316", "620", "785", "913", "270", "502", "606",
        "859", "225", "318", "337", "504", "985", "413", "508", "617", "781", "978", "301",
        "410", "207", "231", "248", "269", "313", "517", "586", "616", "734", "810", "906",
        "989", "218", "320", "507", "612", "651", "763", "952", "314", "417", "573", "636",
        "660", "816", "228", "601", "662", "406", "252", "336", "704", "828", "910", "919",
        "701", "308", "402", "603", "201", "609", "732", "856", "908", "973", "505", "575",
        "702", "775", "212", "315", "516", "518", "585", "607", "631", "716", "718", "845",
        "914", "216", "330", "419", "440", "513", "614", "740", "937", "405", "580", "918",
        "503", "541", "215", "412", "570", "610", "717", "724", "814", "401", "803", "843",
        "864", "605", "423", "615", "731", "865", "901", "931", "210", "214", "254", "281",
        "325", "361", "409", "432", "512", "713", "806", "817", "830", "903", "915", "936",
        "940", "956", "972", "979", "435", "801", "276", "434", "540", "703", "757", "804",
        "802", "206", "253", "360", "425", "509", "262", "414", "608", "715", "920", "304",
        "307",
    ]),
    raw_country!("Uruguay", [America, SouthAmerica], "uy", "598"),
    raw_country!("Uzbekistan", [Asia, ExUssr], "uz", "998", Some(".. ... .. ..")),
    raw_country!("Vanuatu", [Oceania], "vu", "678"),
    raw_country!("Vatican City", [Europe], "va", "39", Some(".. .... ...."), 1),
    raw_country!("Venezuela", [America, SouthAmerica], "ve", "58"),
    raw_country!("Vietnam", [Asia], "vn", "84"),
    raw_country!("Yemen", [MiddleEast], "ye", "967"),
    raw_country!("Zambia", [Africa], "zm", "260"),
    raw_country!("Zimbabwe", [Africa], "zw", "263"),
];

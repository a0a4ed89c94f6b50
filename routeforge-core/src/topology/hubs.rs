//! Fixed hub table and the corridors connecting it

/// Id of the synthetic node placed at the request origin
pub const ORIGIN_ID: &str = "ORIGIN";
/// Id of the synthetic node placed at the request destination
pub const DESTINATION_ID: &str = "DESTINATION";

/// Static description of a hub: id, display name, latitude, longitude
#[derive(Debug, Clone, Copy)]
pub struct HubSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

const fn hub(id: &'static str, name: &'static str, latitude: f64, longitude: f64) -> HubSpec {
    HubSpec {
        id,
        name,
        latitude,
        longitude,
    }
}

pub const HUBS: [HubSpec; 18] = [
    hub("BJS", "Beijing", 39.9042, 116.4074),
    hub("TSN", "Tianjin", 39.3434, 117.3616),
    hub("SHE", "Shenyang", 41.8057, 123.4315),
    hub("HRB", "Harbin", 45.8038, 126.5350),
    hub("TAO", "Qingdao", 36.0671, 120.3826),
    hub("TNA", "Jinan", 36.6512, 117.1201),
    hub("CGO", "Zhengzhou", 34.7466, 113.6254),
    hub("XIY", "Xi'an", 34.3416, 108.9398),
    hub("NKG", "Nanjing", 32.0603, 118.7969),
    hub("SHA", "Shanghai", 31.2304, 121.4737),
    hub("HGH", "Hangzhou", 30.2741, 120.1551),
    hub("WUH", "Wuhan", 30.5928, 114.3055),
    hub("CTU", "Chengdu", 30.5728, 104.0668),
    hub("CKG", "Chongqing", 29.5630, 106.5516),
    hub("CSX", "Changsha", 28.2282, 112.9388),
    hub("XMN", "Xiamen", 24.4798, 118.0894),
    hub("CAN", "Guangzhou", 23.1291, 113.2644),
    hub("SZX", "Shenzhen", 22.5431, 114.0579),
];

/// Undirected hub adjacencies. Each one becomes two directed links.
pub const CORRIDORS: [(&str, &str); 32] = [
    ("BJS", "TSN"),
    ("BJS", "SHE"),
    ("BJS", "TNA"),
    ("BJS", "CGO"),
    ("BJS", "XIY"),
    ("TSN", "TNA"),
    ("TSN", "SHE"),
    ("SHE", "HRB"),
    ("TNA", "TAO"),
    ("TNA", "NKG"),
    ("TNA", "CGO"),
    ("TAO", "SHA"),
    ("TAO", "NKG"),
    ("CGO", "XIY"),
    ("CGO", "WUH"),
    ("CGO", "NKG"),
    ("XIY", "CTU"),
    ("XIY", "WUH"),
    ("NKG", "SHA"),
    ("NKG", "HGH"),
    ("NKG", "WUH"),
    ("SHA", "HGH"),
    ("HGH", "XMN"),
    ("HGH", "WUH"),
    ("WUH", "CSX"),
    ("WUH", "CKG"),
    ("CTU", "CKG"),
    ("CKG", "CSX"),
    ("CSX", "CAN"),
    ("XMN", "CAN"),
    ("XMN", "SZX"),
    ("CAN", "SZX"),
];

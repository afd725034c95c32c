use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /sync/collection`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollectionPayload {
    pub movies: Vec<CollectionMovie>,
}

impl CollectionPayload {
    pub fn new(movies: Vec<CollectionMovie>) -> Self {
        Self { movies }
    }

    /// Identifiers only, for log lines that must not carry library details.
    pub fn summary(&self) -> String {
        let ids = self
            .movies
            .iter()
            .map(|movie| movie.ids.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} movie(s) [{}]", self.movies.len(), ids)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionMovie {
    pub title: String,
    pub year: i32,
    pub ids: MovieIds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collected_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdr: Option<Hdr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_channels: Option<AudioChannels>,
    #[serde(rename = "3d", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_3d: bool,
}

impl CollectionMovie {
    pub fn new(title: impl Into<String>, year: i32, ids: MovieIds) -> Self {
        Self {
            title: title.into(),
            year,
            ids,
            collected_at: None,
            media_type: None,
            resolution: None,
            hdr: None,
            audio: None,
            audio_channels: None,
            is_3d: false,
        }
    }

    pub fn collected_at(mut self, at: DateTime<Utc>) -> Self {
        self.collected_at = Some(at);
        self
    }

    pub fn media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = Some(resolution);
        self
    }

    pub fn hdr(mut self, hdr: Hdr) -> Self {
        self.hdr = Some(hdr);
        self
    }

    pub fn audio(mut self, audio: Audio, channels: AudioChannels) -> Self {
        self.audio = Some(audio);
        self.audio_channels = Some(channels);
        self
    }

    pub fn three_d(mut self, is_3d: bool) -> Self {
        self.is_3d = is_3d;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MovieIds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trakt: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<i64>,
}

impl MovieIds {
    pub fn tmdb(tmdb: i64) -> Self {
        Self {
            tmdb: Some(tmdb),
            ..Self::default()
        }
    }

    pub fn with_imdb(mut self, imdb: impl Into<String>) -> Self {
        self.imdb = Some(imdb.into());
        self
    }
}

impl std::fmt::Display for MovieIds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if let Some(trakt) = self.trakt {
            parts.push(format!("trakt:{}", trakt));
        }
        if let Some(tmdb) = self.tmdb {
            parts.push(format!("tmdb:{}", tmdb));
        }
        if let Some(imdb) = &self.imdb {
            parts.push(format!("imdb:{}", imdb));
        }
        if parts.is_empty() {
            if let Some(slug) = &self.slug {
                parts.push(format!("slug:{}", slug));
            }
        }
        write!(f, "{}", parts.join("/"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Digital,
    Bluray,
    Hddvd,
    Dvd,
    Vcd,
    Vhs,
    Betamax,
    Laserdisc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "uhd_4k")]
    Uhd4k,
    #[serde(rename = "hd_1080p")]
    Hd1080p,
    #[serde(rename = "hd_1080i")]
    Hd1080i,
    #[serde(rename = "hd_720p")]
    Hd720p,
    #[serde(rename = "sd_480p")]
    Sd480p,
    #[serde(rename = "sd_480i")]
    Sd480i,
    #[serde(rename = "sd_576p")]
    Sd576p,
    #[serde(rename = "sd_576i")]
    Sd576i,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hdr {
    DolbyVision,
    Hdr10,
    #[serde(rename = "hdr10_plus")]
    Hdr10Plus,
    Hlg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audio {
    Lpcm,
    Mp3,
    Mp2,
    Aac,
    Ogg,
    OggOpus,
    Wma,
    Flac,
    Dts,
    DtsMa,
    DtsHr,
    DtsX,
    #[serde(rename = "auro_3d")]
    Auro3d,
    DolbyDigital,
    DolbyDigitalPlus,
    DolbyDigitalPlusAtmos,
    DolbyAtmos,
    DolbyTruehd,
    DolbyPrologic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioChannels {
    #[serde(rename = "1.0")]
    Mono,
    #[serde(rename = "2.0")]
    Stereo,
    #[serde(rename = "2.1")]
    Stereo21,
    #[serde(rename = "3.0")]
    Three,
    #[serde(rename = "3.1")]
    Three1,
    #[serde(rename = "4.0")]
    Four,
    #[serde(rename = "4.1")]
    Four1,
    #[serde(rename = "5.0")]
    Five,
    #[serde(rename = "5.1")]
    Surround51,
    #[serde(rename = "5.1.2")]
    Surround512,
    #[serde(rename = "5.1.4")]
    Surround514,
    #[serde(rename = "6.1")]
    Surround61,
    #[serde(rename = "7.1")]
    Surround71,
    #[serde(rename = "7.1.2")]
    Surround712,
    #[serde(rename = "7.1.4")]
    Surround714,
    #[serde(rename = "9.1")]
    Surround91,
    #[serde(rename = "10.1")]
    Surround101,
}

use serde::Serialize;

/// Canned message plus accent color for a score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Message {
    pub text: &'static str,
    pub color: &'static str,
}

/// Performance label for the activity tracker. Bands are ordered and
/// mutually exclusive; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformanceLabel {
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

const DANGER: &str = "#ef4444";
const ORANGE: &str = "#f97316";
const WARNING: &str = "#f59e0b";
const LIME: &str = "#84cc16";
const SUCCESS: &str = "#10b981";
const PRIMARY: &str = "#6366f1";

pub fn performance_label(percentage: u8) -> PerformanceLabel {
    if percentage <= 20 {
        PerformanceLabel {
            title: "Nyaris Nol",
            description: "Hampir tidak ada yang selesai. Mulai dari satu hal kecil.",
            color: DANGER,
        }
    } else if percentage <= 40 {
        PerformanceLabel {
            title: "Masih Berantakan",
            description: "Ada gerakan, tapi jadwalmu belum pegang kendali.",
            color: ORANGE,
        }
    } else if percentage <= 60 {
        PerformanceLabel {
            title: "Setengah Jalan",
            description: "Separuh target tercapai. Jangan berhenti di sini.",
            color: WARNING,
        }
    } else if percentage <= 80 {
        PerformanceLabel {
            title: "Mulai Konsisten",
            description: "Ritme mulai terbentuk. Pertahankan beberapa hari lagi.",
            color: LIME,
        }
    } else if percentage < 100 {
        PerformanceLabel {
            title: "Hampir Sempurna",
            description: "Tinggal sedikit lagi. Selesaikan sisanya.",
            color: SUCCESS,
        }
    } else {
        PerformanceLabel {
            title: "Hari Penuh",
            description: "Semua target hari ini selesai. Lanjutkan besok.",
            color: PRIMARY,
        }
    }
}

pub fn health_message(percentage: u8) -> Message {
    if percentage < 50 {
        Message {
            text: "Disiplinmu robek. Perbaiki sekarang.",
            color: DANGER,
        }
    } else if percentage < 80 {
        Message {
            text: "Masih hidup, tapi jadwal badan kamu kacau.",
            color: WARNING,
        }
    } else if percentage < 100 {
        Message {
            text: "Tubuh mulai stabil. Jangan kendor.",
            color: SUCCESS,
        }
    } else {
        Message {
            text: "Badannmu kelas unggulan. Lanjutkan.",
            color: PRIMARY,
        }
    }
}

pub fn weekly_message(score: u8) -> Message {
    if score < 50 {
        Message {
            text: "Pemalas bersertifikat. Sistem hidupmu error.",
            color: DANGER,
        }
    } else if score < 80 {
        Message {
            text: "Masih mentok setengah rajin.",
            color: WARNING,
        }
    } else if score < 100 {
        Message {
            text: "Kerja keras terlihat. Tinggal mentalnya.",
            color: SUCCESS,
        }
    } else {
        Message {
            text: "Calon orang sukses nih\u{2026} tapi jangan GR.",
            color: PRIMARY,
        }
    }
}

pub fn monthly_message(average: u8) -> Message {
    if average < 50 {
        Message {
            text: "Pemalas tingkat akhir. Satu bulan hilang begitu saja.",
            color: DANGER,
        }
    } else if average < 80 {
        Message {
            text: "Kemauan ada, eksekusi payah.",
            color: WARNING,
        }
    } else if average < 100 {
        Message {
            text: "Disiplin kuat, kamu bergerak.",
            color: SUCCESS,
        }
    } else {
        Message {
            text: "Kamu bukan manusia biasa. Model disiplin.",
            color: PRIMARY,
        }
    }
}

pub fn monthly_analysis(average: u8) -> &'static str {
    if average >= 80 {
        "Performa luar biasa! Konsistensi bulan ini menunjukkan disiplin yang kuat. \
         Pertahankan momentum ini untuk bulan depan dengan menetapkan target yang lebih tinggi."
    } else if average >= 60 {
        "Performa cukup baik. Terlihat usaha konsisten, tapi masih ada ruang untuk peningkatan. \
         Fokus pada minggu dengan skor terendah dan identifikasi area yang perlu perbaikan."
    } else {
        "Perlu evaluasi serius. Identifikasi penyebab performa rendah dan buat rencana perbaikan \
         untuk bulan depan. Mulai dari hal kecil yang konsisten dan fokus pada satu perubahan \
         positif setiap minggu."
    }
}

//! Generator for the Formulir Permintaan dan Pemberian Cuti.
//!
//! Renders a leave request (with its employee snapshot) into the fixed
//! eight-section F4 form used for printed leave letters. The layout is a
//! regulated paper form: the section tree is static markup, parameterized
//! only at the data-driven cells (employee identity, selected leave type,
//! duration, dates, balances, remarks, signatories).

use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::common::{escape_typst_string, format_tanggal, pdf_filename};
use super::engine::TypstRenderEngine;
use super::{GeneratedDocument, Generator, GeneratorError};

const TEMPLATE_FILE: &str = "formulir_cuti.typ";

/// The six leave types of section II, in printed order.
pub const JENIS_CUTI: [&str; 6] = [
    "Cuti Tahunan",
    "Cuti Besar",
    "Cuti Sakit",
    "Cuti Melahirkan",
    "Cuti Karena Alasan Penting",
    "Cuti di Luar Tanggungan Negara",
];

/// The three duration units of section IV, in printed order.
pub const SATUAN_CUTI: [&str; 3] = ["Hari", "Bulan", "Tahun"];

lazy_static! {
    /// Institutional class marker followed by the place name.
    static ref LOKASI_RE: Regex = Regex::new(r"(?:IIA|IIB|I)\s+(.+)$").expect("lokasi pattern");
}

/// Employee snapshot as printed in section I and the signature blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PegawaiData {
    pub name: String,
    pub nip: String,
    pub position: String,
    pub years_of_service: String,
    pub work_unit: String,
}

/// Complete renderable record for one leave form.
///
/// Balance counters are the snapshot taken when the request was filed, not
/// the employee's live counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuratCutiData {
    pub pegawai: PegawaiData,
    pub letter_date: chrono::NaiveDate,
    pub leave_type: String,
    pub reason: String,
    pub duration: i32,
    pub duration_unit: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub address_during_leave: String,
    pub phone_number: String,
    pub supervisor_name: String,
    pub supervisor_nip: String,
    pub official_name: String,
    pub official_nip: String,
    pub leave_notes: String,
    pub remaining_n2: i32,
    pub remaining_n1: i32,
    pub remaining_n: i32,
}

/// Derive the dateline place name from a free-text work unit.
///
/// Looks for an institutional class code ("IIA", "IIB", "I") and returns the
/// remainder as the place name; without a marker, falls back to the last two
/// whitespace-separated tokens. Total: never fails, and never returns an
/// empty string for input containing at least one token.
pub fn nama_lokasi(unit_kerja: &str) -> String {
    if let Some(caps) = LOKASI_RE.captures(unit_kerja) {
        return caps[1].trim().to_string();
    }
    let kata: Vec<&str> = unit_kerja.split_whitespace().collect();
    let mulai = kata.len().saturating_sub(2);
    kata[mulai..].join(" ")
}

/// Checkmark for a section II row: marked iff the row label is the selected
/// leave type. Unknown types therefore mark no row.
fn tanda_centang(dipilih: &str, opsi: &str) -> &'static str {
    if dipilih == opsi {
        "\u{2713}"
    } else {
        ""
    }
}

/// The "(hari/bulan/tahun)" words of section IV with the two non-selected
/// units struck through. An unknown unit strikes nothing.
fn kata_satuan(satuan: &str) -> String {
    let dikenal = SATUAN_CUTI.contains(&satuan);
    SATUAN_CUTI
        .iter()
        .map(|opsi| {
            let kata = opsi.to_lowercase();
            if dikenal && *opsi != satuan {
                format!("#strike[{kata}]")
            } else {
                kata
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Split the free-text remarks into the two remark cells of section V.
///
/// First line fills the N-1 row, second fills the N row, anything further is
/// dropped. This mirrors the printed form exactly; the line positions carry
/// no deeper meaning than the two available remark cells.
fn baris_catatan(leave_notes: &str) -> (String, String) {
    let mut lines = leave_notes.lines();
    let n1 = lines.next().unwrap_or("").to_string();
    let n = lines.next().unwrap_or("").to_string();
    (n1, n)
}

const PAGE_SETUP: &str = "\
#set page(width: 612pt, height: 936pt, margin: (top: 25pt, bottom: 20pt, left: 30pt, right: 30pt))
#set text(size: 9pt)
#set table(stroke: 0.5pt, inset: 3pt)

";

const CATATAN_KAKI: &str = r#"#text(size: 7pt)[
  Catatan \
  \* Coret yang tidak perlu \
  \*\* Pilih salah satu dengan memberikan tanda centang (V) \
  \*\*\* diisi oleh pejabat yang menangani bidang kepegawaian sebelum PNS mengajukan cuti \
  \*\*\*\* diberi tanda centang dan alasan \
  N = Cuti tahun berjalan \
  N-1 = Sisa cuti 1 tahun sebelumnya \
  N-2 = Sisa cuti 2 tahun sebelumnya
]
"#;

/// Generator for the leave form. Stateless: every call is an independent
/// pure transform of its input record.
pub struct SuratCutiGenerator;

impl SuratCutiGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render the complete Typst source for one form. Deterministic: the
    /// same record always produces the same source string.
    pub fn render_typst(&self, data: &SuratCutiData) -> String {
        let lokasi = nama_lokasi(&data.pegawai.work_unit);
        let (catatan_n1, catatan_n) = baris_catatan(&data.leave_notes);

        let mut src = String::with_capacity(4096);
        src.push_str(PAGE_SETUP);
        src.push_str(&self.bagian_kepala(data, &lokasi));
        src.push_str(&self.bagian_data_pegawai(data));
        src.push_str(&self.bagian_jenis_cuti(data));
        src.push_str(&self.bagian_alasan(data));
        src.push_str(&self.bagian_lamanya(data));
        src.push_str(&self.bagian_catatan_cuti(data, &catatan_n1, &catatan_n));
        src.push_str(&self.bagian_alamat(data));
        src.push_str(&self.bagian_pertimbangan_atasan(data));
        src.push_str(&self.bagian_keputusan_pejabat(data));
        src.push_str(CATATAN_KAKI);
        src
    }

    /// Dateline and fixed addressee block, then the centered title.
    fn bagian_kepala(&self, data: &SuratCutiData, lokasi: &str) -> String {
        format!(
            r#"#align(right)[
  #"{lokasi}, {tanggal}" \
  Yth. Kepala Lapas Kelas IIB Gunung Sugih \
  di \
  Gunung Sugih
]

#align(center, text(size: 10pt)[Formulir Permintaan dan Pemberian Cuti])

"#,
            lokasi = escape_typst_string(lokasi),
            tanggal = format_tanggal(data.letter_date),
        )
    }

    /// I. DATA PEGAWAI
    fn bagian_data_pegawai(&self, data: &SuratCutiData) -> String {
        format!(
            r#"#table(
  columns: (12%, 38%, 12%, 38%),
  table.cell(colspan: 4)[I. DATA PEGAWAI],
  [Nama], [*#"{nama}"*], [NIP], [#"{nip}"],
  [Jabatan], [#"{jabatan}"], [Masa Kerja], [#"{masa_kerja}"],
  [Unit Kerja], table.cell(colspan: 3)[#"{unit_kerja}"],
)

"#,
            nama = escape_typst_string(&data.pegawai.name.to_uppercase()),
            nip = escape_typst_string(&data.pegawai.nip),
            jabatan = escape_typst_string(&data.pegawai.position),
            masa_kerja = escape_typst_string(&data.pegawai.years_of_service),
            unit_kerja = escape_typst_string(&data.pegawai.work_unit),
        )
    }

    /// II. JENIS CUTI YANG DIAMBIL — six rows, the selected type checked.
    fn bagian_jenis_cuti(&self, data: &SuratCutiData) -> String {
        let mut baris = String::new();
        for (i, pasangan) in JENIS_CUTI.chunks(2).enumerate() {
            baris.push_str(&format!(
                "  [{no_kiri}\\.], [{kiri}], table.cell(align: center)[{c_kiri}], \
[{no_kanan}\\.], [{kanan}], table.cell(align: center)[{c_kanan}],\n",
                no_kiri = 2 * i + 1,
                kiri = pasangan[0],
                c_kiri = tanda_centang(&data.leave_type, pasangan[0]),
                no_kanan = 2 * i + 2,
                kanan = pasangan[1],
                c_kanan = tanda_centang(&data.leave_type, pasangan[1]),
            ));
        }
        format!(
            "#table(\n  columns: (5%, 35%, 10%, 5%, 45%, 10%),\n  \
table.cell(colspan: 6)[II. JENIS CUTI YANG DIAMBIL \\*\\*],\n{baris})\n\n"
        )
    }

    /// III. ALASAN CUTI
    fn bagian_alasan(&self, data: &SuratCutiData) -> String {
        format!(
            r#"#table(
  columns: (100%,),
  [III. ALASAN CUTI],
  [#"{alasan}"],
)

"#,
            alasan = escape_typst_string(&data.reason),
        )
    }

    /// IV. LAMANYA CUTI — the non-selected duration units struck through.
    fn bagian_lamanya(&self, data: &SuratCutiData) -> String {
        format!(
            r#"#table(
  columns: (12%, 20%, 13%, 22%, 8%, 25%),
  table.cell(colspan: 6)[IV. LAMANYA CUTI],
  table.cell(align: center)[Selama #"{durasi}"], table.cell(align: center)[({satuan})\*], table.cell(align: center)[mulai tanggal], table.cell(align: center)[*#"{mulai}"*], table.cell(align: center)[s/d], table.cell(align: center)[*#"{selesai}"*],
)

"#,
            durasi = data.duration,
            satuan = kata_satuan(&data.duration_unit),
            mulai = format_tanggal(data.start_date),
            selesai = format_tanggal(data.end_date),
        )
    }

    /// V. CATATAN CUTI — balance rows beside the static leave-type legend.
    fn bagian_catatan_cuti(&self, data: &SuratCutiData, catatan_n1: &str, catatan_n: &str) -> String {
        format!(
            r#"#table(
  columns: (5%, 3%, 10%, 42%, 5%, 35%),
  table.cell(colspan: 4)[V. CATATAN CUTI \*\*\*], table.cell(colspan: 2)[],
  [1\.], table.cell(colspan: 3)[{jenis1}], [2\.], [{jenis2}],
  table.cell(colspan: 2)[Tahun], [Sisa], table.cell(align: center)[Keterangan], [3\.], [{jenis3}],
  table.cell(colspan: 2)[N-2], [#"{n2} hari"], [], [4\.], [{jenis4}],
  table.cell(colspan: 2)[N-1], [#"{n1} hari"], [#"{catatan_n1}"], [5\.], [{jenis5}],
  table.cell(colspan: 2)[N], [#"{n} hari"], [#"{catatan_n}"], [6\.], [{jenis6}],
)

"#,
            jenis1 = JENIS_CUTI[0],
            jenis2 = JENIS_CUTI[1],
            jenis3 = JENIS_CUTI[2],
            jenis4 = JENIS_CUTI[3],
            jenis5 = JENIS_CUTI[4],
            jenis6 = JENIS_CUTI[5],
            n2 = data.remaining_n2,
            n1 = data.remaining_n1,
            n = data.remaining_n,
            catatan_n1 = escape_typst_string(catatan_n1),
            catatan_n = escape_typst_string(catatan_n),
        )
    }

    /// VI. ALAMAT SELAMA MENJALANKAN CUTI — closes with the employee's own
    /// signature block.
    fn bagian_alamat(&self, data: &SuratCutiData) -> String {
        format!(
            r#"#table(
  columns: (45%, 15%, 40%),
  table.cell(colspan: 3)[VI. ALAMAT SELAMA MENJALANKAN CUTI],
  [], [No. Telpon], [#"{telp}"],
  [#"{alamat}"], table.cell(colspan: 2, align: right)[Hormat Saya,],
  [], table.cell(colspan: 2, align: right)[*#"{nama}"* \ NIP.#"{nip}"],
)

"#,
            telp = escape_typst_string(&data.phone_number),
            alamat = escape_typst_string(&data.address_during_leave),
            nama = escape_typst_string(&data.pegawai.name.to_uppercase()),
            nip = escape_typst_string(&data.pegawai.nip),
        )
    }

    /// VII. PERTIMBANGAN ATASAN LANGSUNG
    fn bagian_pertimbangan_atasan(&self, data: &SuratCutiData) -> String {
        format!(
            r#"#table(
  columns: (25%, 25%, 25%, 25%),
  table.cell(colspan: 4)[VII. PERTIMBANGAN ATASAN LANGSUNG \*\*],
  table.cell(align: center)[DISETUJUI], table.cell(align: center)[PERUBAHAN\*\*\*\*], table.cell(align: center)[DITANGGUHKAN\*\*\*\*], table.cell(align: center)[TIDAK DISETUJUI\*\*\*\*],
  table.cell(colspan: 2)[Catatan :], table.cell(colspan: 2, align: right)[*#"{nama}"* \ NIP. #"{nip}"],
)

"#,
            nama = escape_typst_string(&data.supervisor_name.to_uppercase()),
            nip = escape_typst_string(&data.supervisor_nip),
        )
    }

    /// VIII. KEPUTUSAN PEJABAT YANG BERWENANG MEMBERIKAN CUTI
    fn bagian_keputusan_pejabat(&self, data: &SuratCutiData) -> String {
        format!(
            r#"#table(
  columns: (25%, 25%, 25%, 25%),
  table.cell(colspan: 4)[VIII. KEPUTUSAN PEJABAT YANG BERWENANG MEMBERIKAN CUTI \*\*],
  table.cell(align: center)[DISETUJUI], table.cell(align: center)[PERUBAHAN\*\*\*\*], table.cell(align: center)[DITANGGUHKAN\*\*\*\*], table.cell(align: center)[TIDAK DISETUJUI\*\*\*\*],
  table.cell(colspan: 2)[Catatan :], table.cell(colspan: 2, align: right)[Kepala, \ \ *#"{nama}"* \ NIP. #"{nip}"],
)

"#,
            nama = escape_typst_string(&data.official_name.to_uppercase()),
            nip = escape_typst_string(&data.official_nip),
        )
    }
}

impl Default for SuratCutiGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<SuratCutiData> for SuratCutiGenerator {
    /// Render and compile the form to PDF bytes.
    fn generate(&self, data: SuratCutiData) -> Result<GeneratedDocument, GeneratorError> {
        let tanggal = format_tanggal(data.letter_date);
        let typst_source = self.render_typst(&data);

        let pdf = TypstRenderEngine::render(TEMPLATE_FILE, &typst_source)?;
        let filename = pdf_filename(&data.pegawai.name, Utc::now().date_naive());

        Ok(GeneratedDocument {
            filename,
            pdf,
            tanggal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nama_lokasi_with_class_marker() {
        assert_eq!(nama_lokasi("Lapas Kelas IIB Gunung Sugih"), "Gunung Sugih");
        assert_eq!(nama_lokasi("Lapas Kelas IIA Bandar Lampung"), "Bandar Lampung");
        assert_eq!(nama_lokasi("Rutan Kelas I Surabaya"), "Surabaya");
    }

    #[test]
    fn test_nama_lokasi_fallback_last_two_words() {
        assert_eq!(nama_lokasi("Kantor Pusat Administrasi"), "Pusat Administrasi");
    }

    #[test]
    fn test_nama_lokasi_single_word_input() {
        assert_eq!(nama_lokasi("Metro"), "Metro");
    }

    #[test]
    fn test_kata_satuan_strikes_non_selected_units() {
        assert_eq!(kata_satuan("Hari"), "hari/#strike[bulan]/#strike[tahun]");
        assert_eq!(kata_satuan("Bulan"), "#strike[hari]/bulan/#strike[tahun]");
        assert_eq!(kata_satuan("Tahun"), "#strike[hari]/#strike[bulan]/tahun");
    }

    #[test]
    fn test_kata_satuan_unknown_unit_strikes_nothing() {
        assert_eq!(kata_satuan("Minggu"), "hari/bulan/tahun");
    }

    #[test]
    fn test_baris_catatan_takes_first_two_lines() {
        let (n1, n) = baris_catatan("pertama\nkedua\nketiga");
        assert_eq!(n1, "pertama");
        assert_eq!(n, "kedua");

        let (n1, n) = baris_catatan("");
        assert_eq!(n1, "");
        assert_eq!(n, "");

        let (n1, n) = baris_catatan("hanya satu");
        assert_eq!(n1, "hanya satu");
        assert_eq!(n, "");
    }
}

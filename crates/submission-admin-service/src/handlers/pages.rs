//! 页面路由处理器
//!
//! 提供根路径和管理页两个静态页面。管理页是一个自包含的 HTML 文档，
//! 通过 /api/admin 下的接口加载数据，交互（过滤、排序、删除、导出）
//! 都映射到对应的查询参数或端点。

use axum::response::Html;

/// 根路径静态页
///
/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// 提交记录管理页
///
/// GET /admin
pub async fn admin() -> Html<&'static str> {
    Html(ADMIN_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="id">
<head>
  <meta charset="utf-8">
  <title>STEMation</title>
  <style>
    body { font-family: sans-serif; max-width: 640px; margin: 4rem auto; color: #222; }
    a { color: #2563eb; }
  </style>
</head>
<body>
  <h1>STEMation</h1>
  <p>Layanan administrasi data submission tes.</p>
  <p><a href="/admin">Buka halaman admin</a></p>
</body>
</html>
"#;

const ADMIN_HTML: &str = r#"<!DOCTYPE html>
<html lang="id">
<head>
  <meta charset="utf-8">
  <title>Submissions Table STEMation</title>
  <style>
    body { font-family: sans-serif; margin: 2rem; color: #222; }
    .filters { margin-bottom: 1rem; }
    .filter-input { padding: 0.4rem; margin-right: 0.5rem; }
    table { border-collapse: collapse; width: 100%; }
    th, td { border: 1px solid #ccc; padding: 0.5rem 0.75rem; text-align: left; }
    th { background: #f3f4f6; cursor: pointer; }
    .delete-button { color: #b91c1c; cursor: pointer; }
    .toolbar { margin-bottom: 1rem; }
  </style>
</head>
<body>
  <h1>Submissions Table STEMation</h1>
  <div class="filters">
    <input type="text" id="filter-nama" class="filter-input" placeholder="Filter Nama">
    <input type="text" id="filter-test-type" class="filter-input" placeholder="Filter Tipe Test">
  </div>
  <div class="toolbar">
    <a id="export-link" href="/api/admin/submissions/export">Export CSV</a>
  </div>
  <table>
    <thead>
      <tr>
        <th data-sort="absen">No Absen</th>
        <th data-sort="nama">Nama</th>
        <th data-sort="testType">Tipe Test</th>
        <th data-sort="score">Score</th>
        <th data-sort="createdAt">Tanggal Pengajuan</th>
        <th>Aksi</th>
      </tr>
    </thead>
    <tbody id="rows"><tr><td colspan="6">Loading...</td></tr></tbody>
  </table>
  <script>
    let sortField = null;

    function queryString() {
      const params = new URLSearchParams();
      const nama = document.getElementById('filter-nama').value;
      const testType = document.getElementById('filter-test-type').value;
      if (nama) params.set('nama', nama);
      if (testType) params.set('testType', testType);
      if (sortField) params.set('sort', sortField);
      const qs = params.toString();
      return qs ? '?' + qs : '';
    }

    async function load() {
      const res = await fetch('/api/admin/submissions' + queryString());
      const body = await res.json();
      if (!body.success) {
        console.error('Error fetching data: ', body.message);
        return;
      }
      const tbody = document.getElementById('rows');
      tbody.innerHTML = '';
      for (const row of body.data) {
        const tr = document.createElement('tr');
        for (const value of [row.absen, row.nama, row.testType, row.score, row.createdAt]) {
          const td = document.createElement('td');
          td.textContent = value;
          tr.appendChild(td);
        }
        const action = document.createElement('td');
        const del = document.createElement('span');
        del.className = 'delete-button';
        del.textContent = 'Delete';
        del.onclick = () => remove(row.id);
        action.appendChild(del);
        tr.appendChild(action);
        tbody.appendChild(tr);
      }
      document.getElementById('export-link').href = '/api/admin/submissions/export' + queryString();
    }

    async function remove(id) {
      const res = await fetch('/api/admin/submissions/' + id, { method: 'DELETE' });
      const body = await res.json();
      if (!body.success) {
        console.error('Error deleting data: ', body.message);
        return;
      }
      load();
    }

    document.getElementById('filter-nama').addEventListener('input', load);
    document.getElementById('filter-test-type').addEventListener('input', load);
    for (const th of document.querySelectorAll('th[data-sort]')) {
      th.addEventListener('click', () => { sortField = th.dataset.sort; load(); });
    }
    load();
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_reference_api_routes() {
        // 管理页的交互必须指向实际存在的端点
        assert!(ADMIN_HTML.contains("/api/admin/submissions"));
        assert!(ADMIN_HTML.contains("/api/admin/submissions/export"));
        assert!(INDEX_HTML.contains("/admin"));
    }

    #[test]
    fn test_admin_page_sort_fields_match_wire_names() {
        // 表头的 data-sort 值必须与 SortField 的 camelCase 序列化一致
        for field in ["absen", "nama", "testType", "score", "createdAt"] {
            assert!(
                ADMIN_HTML.contains(&format!("data-sort=\"{}\"", field)),
                "缺少排序列: {field}"
            );
        }
    }
}

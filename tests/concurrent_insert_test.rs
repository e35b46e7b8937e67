// ==========================================
// 并发控制测试
// ==========================================
// 职责: 验证并发登记时 id 不重复、不跳号,读取不到半条记录
// ==========================================

mod test_helpers;

use defect_tracker::api::CreateDefectRequest;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use test_helpers::TestEnv;

const THREADS: usize = 8;
const PER_THREAD: usize = 25;

#[test]
fn test_concurrent_inserts_ids_unique_and_contiguous() {
    let env = TestEnv::new().expect("无法创建测试环境");
    let api = env.state.defect_api.clone();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let api = Arc::clone(&api);
            thread::spawn(move || {
                (0..PER_THREAD)
                    .map(|i| {
                        api.create_defect(CreateDefectRequest::new(
                            &format!("T{}-{}", t, i),
                            "scratch",
                            "paint",
                            i % 3 == 0,
                        ))
                        .expect("并发登记失败")
                        .id
                    })
                    .collect::<Vec<i64>>()
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        let thread_ids = handle.join().expect("线程 panic");
        // 单线程内 id 严格递增
        assert!(thread_ids.windows(2).all(|w| w[0] < w[1]));
        ids.extend(thread_ids);
    }

    let expected = (THREADS * PER_THREAD) as i64;
    let unique: HashSet<i64> = ids.iter().copied().collect();
    assert_eq!(unique.len() as i64, expected, "id 不得重复");
    assert_eq!(*ids.iter().min().unwrap(), 1);
    assert_eq!(*ids.iter().max().unwrap(), expected, "id 不得跳号");

    let stats = env.state.stats_api.get_summary_stats().unwrap();
    assert_eq!(stats.total_defects, expected);
}

#[test]
fn test_concurrent_reads_see_consistent_snapshot() {
    let env = TestEnv::new().expect("无法创建测试环境");
    let defect_api = env.state.defect_api.clone();
    let stats_api = env.state.stats_api.clone();

    let writer = {
        let api = Arc::clone(&defect_api);
        thread::spawn(move || {
            for i in 0..100 {
                api.create_defect(CreateDefectRequest::new(
                    &format!("W{}", i),
                    if i % 2 == 0 { "scratch" } else { "dent" },
                    "paint",
                    false,
                ))
                .expect("登记失败");
            }
        })
    };

    let reader = thread::spawn(move || {
        for _ in 0..50 {
            let listed = defect_api.list_defects().expect("查询失败");
            // 列表内 id 唯一且每条记录字段完整
            let ids: HashSet<i64> = listed.iter().map(|r| r.id).collect();
            assert_eq!(ids.len(), listed.len());
            assert!(listed.iter().all(|r| !r.qr_code.is_empty() && !r.timestamp.is_empty()));

            let by_type: i64 = stats_api
                .get_stats_by_type()
                .expect("统计失败")
                .iter()
                .map(|r| r.count)
                .sum();
            assert!(by_type >= listed.len() as i64);
        }
    });

    writer.join().expect("写线程 panic");
    reader.join().expect("读线程 panic");

    assert_eq!(env.state.defect_api.list_defects().unwrap().len(), 100);
}
